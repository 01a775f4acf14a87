use std::io::Write;

use itertools::Itertools;
use owo_colors::OwoColorize;

use crate::prelude::*;

impl Automaton {
    /// Writes a human readable listing of `self` to `out`: the initial states, the final states
    /// and, for every state with outgoing transitions, one line per symbol listing the targets.
    /// Epsilon is written as [`EPSILON_GLYPH`].
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
    ///     .with_transitions([(0, 'a', 0), (0, 'a', 1)])
    ///     .build();
    /// let mut out = Vec::new();
    /// fa.pretty_print(&mut out).unwrap();
    /// assert_eq!(
    ///     String::from_utf8(out).unwrap(),
    ///     "Initial states:\n\t0 \nFinal states:\n\t1 \nTransitions:\n\tFor state 0:\n\t\tFor letter a: 0 1 \n"
    /// );
    /// ```
    pub fn pretty_print<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Initial states:")?;
        writeln!(out, "\t{}", trailing(self.initial_states()))?;
        writeln!(out, "Final states:")?;
        writeln!(out, "\t{}", trailing(self.final_states()))?;
        writeln!(out, "Transitions:")?;
        for (source, group) in &self.transitions.iter().group_by(|((source, _), _)| *source) {
            writeln!(out, "\tFor state {source}:")?;
            for ((_, symbol), targets) in group {
                writeln!(
                    out,
                    "\t\tFor letter {}: {}",
                    symbol.show(),
                    trailing(targets.iter().copied())
                )?;
            }
        }
        Ok(())
    }

    /// Returns a string representation of the transition table of `self`. There is one row per
    /// state and one column per symbol (and one for epsilon if `self` has epsilon transitions).
    /// Initial states are prefixed with an arrow and final states are printed in bold.
    pub fn transition_table(&self) -> String {
        let columns: Vec<Symbol> = self
            .has_epsilon_transition()
            .then_some(Symbol::Epsilon)
            .into_iter()
            .chain(self.symbols().map(Symbol::Char))
            .collect();

        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string()).chain(columns.iter().map(|symbol| symbol.show())),
        );
        for (&q, flags) in &self.states {
            let name = match flags.initial {
                true => format!("→{q}"),
                false => q.to_string(),
            };
            let name = match flags.accepting {
                true => name.bold().to_string(),
                false => name,
            };
            let row = std::iter::once(name).chain(columns.iter().map(|&symbol| {
                match self.transitions.get(&(q, symbol)) {
                    Some(targets) => targets.iter().join(", "),
                    None => "-".to_string(),
                }
            }));
            builder.push_record(row);
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

impl std::fmt::Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buffer = Vec::new();
        self.pretty_print(&mut buffer).map_err(|_| std::fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buffer))
    }
}

/// Joins states with a trailing space after each of them.
fn trailing<I: IntoIterator<Item = StateId>>(states: I) -> String {
    states.into_iter().map(|q| format!("{q} ")).join("")
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn pretty_print_lists_epsilon_with_glyph() {
        let fa = Automaton::builder()
            .with_symbols(['a', 'b'])
            .with_states([0, 1, 2])
            .with_initial([0, 2])
            .with_final([2])
            .with_transitions([(0, 'b', 1), (1, 'a', 2), (1, 'a', 0)])
            .with_transitions([(0, Symbol::Epsilon, 2)])
            .build();

        let mut out = Vec::new();
        fa.pretty_print(&mut out).unwrap();
        let expected = "Initial states:\n\t0 2 \n\
            Final states:\n\t2 \n\
            Transitions:\n\
            \tFor state 0:\n\
            \t\tFor letter ~: 2 \n\
            \t\tFor letter b: 1 \n\
            \tFor state 1:\n\
            \t\tFor letter a: 0 2 \n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
        assert_eq!(fa.to_string(), expected);
    }

    #[test]
    fn pretty_print_empty_automaton() {
        let mut out = Vec::new();
        Automaton::new().pretty_print(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Initial states:\n\t\nFinal states:\n\t\nTransitions:\n"
        );
    }

    #[test]
    fn transition_table_has_a_row_per_state() {
        let fa = Automaton::builder()
            .with_symbols(['a', 'b'])
            .with_states([0, 1])
            .with_initial([0])
            .with_transitions([(0, 'a', 1), (0, 'a', 0), (1, 'b', 1)])
            .with_transitions([(1, Symbol::Epsilon, 0)])
            .build();
        let table = fa.transition_table();
        assert!(table.contains("State"));
        assert!(table.contains("→0"));
        assert!(table.contains("0, 1"));
        assert!(table.contains('~'));
        assert!(table.lines().count() >= 5);
    }
}
