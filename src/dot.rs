#[cfg(feature = "graphviz")]
use std::ffi::OsStr;
use std::io::Write;

use itertools::Itertools;

use crate::prelude::*;

/// Attributes that can be attached to a node in the DOT output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotStateAttribute {
    /// The shape of the node.
    Shape(String),
    /// The label that is displayed inside the node.
    Label(String),
    /// Height of the node in inches.
    Height(u8),
    /// Width of the node in inches.
    Width(u8),
}

impl std::fmt::Display for DotStateAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DotStateAttribute::Shape(shape) => write!(f, "shape={shape}"),
            DotStateAttribute::Label(label) => write!(f, "label=\"{label}\""),
            DotStateAttribute::Height(height) => write!(f, "height={height}"),
            DotStateAttribute::Width(width) => write!(f, "width={width}"),
        }
    }
}

/// Attributes that can be attached to an edge in the DOT output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotTransitionAttribute {
    /// The label written next to the edge.
    Label(String),
}

impl std::fmt::Display for DotTransitionAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DotTransitionAttribute::Label(label) => write!(f, "label=\"{}\"", escape(label)),
        }
    }
}

/// Escapes the characters that may not appear verbatim inside a quoted DOT string.
fn escape(label: &str) -> String {
    label
        .chars()
        .map(|c| match c {
            '"' => "\\\"".to_string(),
            '\\' => "\\\\".to_string(),
            c => c.to_string(),
        })
        .join("")
}

fn attributes<A: ToString>(attrs: impl IntoIterator<Item = A>) -> String {
    attrs.into_iter().map(|attr| attr.to_string()).join(", ")
}

impl Automaton {
    fn dot_state_attributes(&self, state: StateId) -> Vec<DotStateAttribute> {
        let shape = if self.is_state_final(state) {
            "doublecircle"
        } else {
            "circle"
        };
        vec![
            DotStateAttribute::Shape(shape.into()),
            DotStateAttribute::Label(state.show()),
        ]
    }

    /// Compute the graphviz representation, for more information on the DOT format,
    /// see the [graphviz documentation](https://graphviz.org/doc/info/lang.html).
    ///
    /// Every state becomes a node named by its number, drawn as a double circle if it is final.
    /// An initial state is pointed to by an edge coming from an invisible node `i<state>`.
    /// Epsilon transitions are labeled with [`EPSILON_GLYPH`].
    ///
    /// # Example
    /// ```
    /// use fa::prelude::*;
    ///
    /// let fa = Automaton::builder()
    ///     .with_symbols(['a'])
    ///     .with_states([0, 1])
    ///     .with_initial([0])
    ///     .with_final([1])
    ///     .with_transitions([(0, 'a', 1)])
    ///     .build();
    /// let dot = fa.dot_representation();
    /// assert!(dot.starts_with("digraph Automaton {"));
    /// assert!(dot.contains("0 -> 1 [label=\"a\"]"));
    /// ```
    pub fn dot_representation(&self) -> String {
        let header = ["digraph Automaton {".to_string(), "rankdir=LR".to_string()];

        let states = self
            .states()
            .map(|q| format!("{q} [{}]", attributes(self.dot_state_attributes(q))));

        let initial_markers = self.initial_states().into_iter().flat_map(|q| {
            let invisible = [
                DotStateAttribute::Shape("none".into()),
                DotStateAttribute::Label(String::new()),
                DotStateAttribute::Height(0),
                DotStateAttribute::Width(0),
            ];
            [
                format!("i{q} [{}]", attributes(invisible)),
                format!("i{q} -> {q}"),
            ]
        });

        let transitions = self.transitions().map(|(p, symbol, q)| {
            format!(
                "{p} -> {q} [{}]",
                attributes([DotTransitionAttribute::Label(symbol.show())])
            )
        });

        header
            .into_iter()
            .chain(states)
            .chain(initial_markers)
            .chain(transitions)
            .chain(std::iter::once("}".to_string()))
            .join("\n")
    }

    /// Writes the result of [`Self::dot_representation`] followed by a newline to `out`.
    pub fn write_dot<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.dot_representation())
    }

    /// Renders the automaton visually (as PNG) and returns a vec of bytes encoding the rendered
    /// image. This needs the `dot` executable of graphviz and is only available on the
    /// `graphviz` crate feature.
    #[cfg(feature = "graphviz")]
    pub fn render(&self) -> Result<Vec<u8>, std::io::Error> {
        let dot = self.dot_representation();
        tracing::trace!("rendering dot representation\n{}", dot);
        run_graphviz(&[OsStr::new("-Tpng")], dot.as_bytes())
    }

    /// Attempts to render the automaton to a PNG file with the given filename. The DOT
    /// representation is passed to graphviz through a temporary file. Only available on the
    /// `graphviz` crate feature.
    #[cfg(feature = "graphviz")]
    pub fn render_to_file_name(&self, filename: &str) -> Result<(), std::io::Error> {
        tracing::trace!("outputting dot and rendering to {filename}");
        let mut tempfile = tempfile::NamedTempFile::new()?;
        self.write_dot(&mut tempfile)?;
        tempfile.flush()?;

        let args = [
            OsStr::new("-Tpng"),
            OsStr::new("-o"),
            OsStr::new(filename),
            tempfile.path().as_os_str(),
        ];
        run_graphviz(&args, &[]).map(|_| ())
    }
}

/// Runs the `dot` executable with `args`, feeds `input` to its standard input and returns what
/// it writes to its standard output. A non-zero exit status is turned into an error.
#[cfg(feature = "graphviz")]
fn run_graphviz(args: &[&OsStr], input: &[u8]) -> std::io::Result<Vec<u8>> {
    use std::process::{Command, Stdio};

    let mut child = Command::new("dot")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    // stdin is dropped at the end of this block, dot only starts once it sees the end of input
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input)?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("dot process exited with status: {}", output.status),
        ));
    }
    Ok(output.stdout)
}
