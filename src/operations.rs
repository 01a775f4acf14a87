mod mirror;

mod subset;

mod complete;

mod complement;

mod product;
pub use product::DEFAULT_SYMBOL;

mod inclusion;
