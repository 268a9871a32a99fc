//! Read-only commands: `parse` and `ls`

use colored::Colorize;
use std::path::Path;

use super::Target;
use crate::cli::RangeArgs;
use crate::name::{self, NameTemplate, SeqName};
use crate::FrameseqError;

type Result<T> = std::result::Result<T, FrameseqError>;

/// Print the sequence pieces of `name`.
///
/// # Errors
/// Returns a name error if `name` is not sequence-shaped.
pub fn parse(name: &str, quiet: bool) -> Result<()> {
    let file_name = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(name);
    let pieces = name::parse(file_name)?;
    let seq_name = SeqName::from(pieces.clone());

    if quiet {
        println!("{}", seq_name.formatted());
        return Ok(());
    }

    let or_none = |v: Option<String>| v.unwrap_or_else(|| "-".dimmed().to_string());
    println!("{}", file_name.bold());
    println!("  {:<10} {}", "base:".cyan(), pieces.name);
    println!("  {:<10} {}", "delim:".cyan(), pieces.sep);
    println!("  {:<10} {}", "start:".cyan(), pieces.start);
    println!("  {:<10} {}", "end:".cyan(), or_none(pieces.end.map(|e| e.to_string())));
    println!("  {:<10} {}", "pad:".cyan(), pieces.pad);
    println!("  {:<10} {}", "brackets:".cyan(), or_none(pieces.brackets.map(|b| b.to_string())));
    println!("  {:<10} {}", "extension:".cyan(), or_none(pieces.extension));
    Ok(())
}

/// List every member of the target and whether it exists on disk.
///
/// # Errors
/// Returns an error if the template and range do not resolve.
pub fn ls(template: &Path, range: &RangeArgs, quiet: bool) -> Result<()> {
    let target = Target::resolve(template, range)?;
    let members = match &target {
        Target::File(file) => file.iter().collect::<Vec<_>>(),
        Target::Sequence(seq) => seq.iter().collect(),
    };
    tracing::debug!(handle = %target, members = members.len(), "listing members");

    let mut present = 0;
    for path in &members {
        let exists = path.exists();
        if exists {
            present += 1;
        }
        if quiet {
            println!("{}", path.display());
        } else if exists {
            println!("{} {}", "✓".green(), path.display());
        } else {
            println!("{} {}", "✗".red(), path.display().to_string().dimmed());
        }
    }

    if !quiet {
        println!("\n{target}");
        let line = format!("{present} of {} member(s) present", members.len());
        if present == members.len() {
            println!("{}", line.green());
        } else {
            println!("{}", line.yellow());
        }
    }
    Ok(())
}
