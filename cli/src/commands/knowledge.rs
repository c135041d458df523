//! # Jflyz Knowledge
//!
//! File: cli/src/commands/knowledge.rs
//!
//! `jflyz knowledge` prints the static business knowledge the brain draws on.
//! With `--pools` it also lists every response pool.
//!
use crate::brain::{Pool, KNOWLEDGE};
use crate::core::error::Result;
use clap::Parser;
use std::io::{self, Write};

/// Arguments for the `knowledge` command.
#[derive(Parser, Debug)]
pub struct KnowledgeArgs {
    /// Also list the response pools.
    #[arg(long)]
    pub pools: bool,
}

/// Handler for `jflyz knowledge`.
pub fn handle_knowledge(args: KnowledgeArgs) -> Result<()> {
    let stdout = io::stdout();
    write_knowledge(&mut stdout.lock(), args.pools)?;
    Ok(())
}

fn write_knowledge<O: Write>(output: &mut O, with_pools: bool) -> io::Result<()> {
    writeln!(output, "Mission: {}", KNOWLEDGE.mission)?;
    writeln!(output, "Values:  {}", KNOWLEDGE.values.join(", "))?;
    writeln!(output, "Target:  {}", KNOWLEDGE.target)?;

    if with_pools {
        for pool in Pool::ALL {
            writeln!(output)?;
            writeln!(output, "[{}]", pool)?;
            for entry in pool.entries() {
                writeln!(output, "  - {}", entry)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_knowledge_and_pools() {
        let mut out = Vec::new();
        write_knowledge(&mut out, true).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Values:  Quality, Exclusivity, Community, Innovation, Authenticity"));
        assert!(out.contains("[product ideas]"));
        assert!(out.contains("  - Hey! Let's make moves!"));
    }

    #[test]
    fn pools_hidden_by_default() {
        let mut out = Vec::new();
        write_knowledge(&mut out, false).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 3);
    }
}
