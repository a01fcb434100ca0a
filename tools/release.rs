use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::process::Command;
use toml_edit::{DocumentMut, Item};

type ReleaseResult<T> = Result<T, Box<dyn Error>>;

fn current_version(doc: &DocumentMut) -> ReleaseResult<String> {
    doc.get("package")
        .and_then(|package| package.get("version"))
        .and_then(Item::as_str)
        .map(str::to_string)
        .ok_or_else(|| "Could not find package.version in Cargo.toml".into())
}

/// Parses `MAJOR.MINOR.PATCH`, ignoring any pre-release suffix
fn parse_version(version: &str) -> ReleaseResult<(u64, u64, u64)> {
    let core = version.split('-').next().unwrap_or(version);
    let parts = core
        .split('.')
        .map(|part| part.parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("Invalid version '{}': {}", version, e))?;

    match parts.as_slice() {
        [major, minor, patch] => Ok((*major, *minor, *patch)),
        _ => Err(format!("Invalid version '{}': expected MAJOR.MINOR.PATCH", version).into()),
    }
}

/// Rejects a new version that does not move forward
fn check_bump(current: &str, new: &str) -> ReleaseResult<()> {
    if parse_version(new)? <= parse_version(current)? {
        return Err(format!("New version {} must be greater than {}", new, current).into());
    }
    Ok(())
}

fn set_version(doc: &mut DocumentMut, new_version: &str) {
    doc["package"]["version"] = Item::from(new_version);
}

fn git_output(args: &[&str]) -> ReleaseResult<Option<String>> {
    let output = Command::new("git").args(args).output()?;
    if !output.status.success() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8(output.stdout)?.trim().to_string()))
}

fn release_notes() -> ReleaseResult<String> {
    let range = match git_output(&["describe", "--tags", "--abbrev=0"])? {
        Some(tag) => {
            println!("Previous tag: {}", tag);
            format!("{}..HEAD", tag)
        }
        None => {
            println!("Previous tag: None");
            "HEAD".to_string()
        }
    };

    Ok(git_output(&["log", "--pretty=format:- %s", &range])?.unwrap_or_default())
}

fn confirm(message: &str) -> io::Result<bool> {
    print!("{} (y/n): ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}

fn run(program: &str, args: &[&str]) -> ReleaseResult<()> {
    println!("Executing: {} {}", program, args.join(" "));
    let status = Command::new(program).args(args).status()?;
    if !status.success() {
        return Err(format!("{} {} failed", program, args.join(" ")).into());
    }
    Ok(())
}

fn main() -> ReleaseResult<()> {
    let mut doc = fs::read_to_string("Cargo.toml")?.parse::<DocumentMut>()?;
    let current = current_version(&doc)?;

    println!("Current version is: {}", current);
    println!("Enter new version:");
    let mut new_version = String::new();
    io::stdin().read_line(&mut new_version)?;
    let new_version = new_version.trim();

    check_bump(&current, new_version)?;

    if !confirm(&format!("Ready to release version {}?", new_version))? {
        println!("Release aborted.");
        return Ok(());
    }

    set_version(&mut doc, new_version);
    fs::write("Cargo.toml", doc.to_string())?;
    println!("Updated Cargo.toml with new version: {}", new_version);

    // Refresh Cargo.lock and make sure the suite still passes
    run("cargo", &["test", "--quiet"])?;

    let notes = release_notes()?;
    if notes.is_empty() && !confirm("No commits since the last tag. Continue?")? {
        println!("Release aborted.");
        return Ok(());
    }
    println!("Release notes:\n{}", notes);

    let tag = format!("v{}", new_version);
    run("git", &["add", "Cargo.toml", "Cargo.lock"])?;
    run("git", &["commit", "-m", &format!("Bump version to {}", new_version)])?;
    run("git", &["tag", "-a", &tag, "-m", &format!("Version {}", new_version)])?;
    run("git", &["push"])?;
    run("git", &["push", "--tags"])?;

    if confirm("Publish to crates.io?")? {
        run("cargo", &["publish"])?;
    } else {
        println!("Skipping crates.io publishing.");
    }

    if confirm("Create GitHub release?")? {
        run("gh", &["release", "create", &tag, "--title", &tag, "--notes", &notes])?;
    } else {
        println!("Skipping GitHub release creation.");
    }

    println!("Successfully released version {}", new_version);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"[package]
name = "tri-list"
version = "0.1.0" # keep in sync with tags

[dependencies]
tracing = "0.1"
"#;

    #[test]
    fn test_reads_and_sets_version() -> ReleaseResult<()> {
        let mut doc = MANIFEST.parse::<DocumentMut>()?;
        assert_eq!(current_version(&doc)?, "0.1.0");

        set_version(&mut doc, "0.2.0");
        assert_eq!(current_version(&doc)?, "0.2.0");
        assert!(doc.to_string().contains("tracing = \"0.1\""));
        Ok(())
    }

    #[test]
    fn test_missing_version() -> ReleaseResult<()> {
        let doc = "[workspace]\nmembers = []\n".parse::<DocumentMut>()?;
        assert!(current_version(&doc).is_err());
        Ok(())
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("1.2.3").unwrap(), (1, 2, 3));
        assert_eq!(parse_version("0.10.0-rc.1").unwrap(), (0, 10, 0));
        assert!(parse_version("1.2").is_err());
        assert!(parse_version("one.two.three").is_err());
    }

    #[test]
    fn test_check_bump() {
        assert!(check_bump("0.1.0", "0.1.1").is_ok());
        assert!(check_bump("0.1.0", "1.0.0").is_ok());
        assert!(check_bump("0.2.0", "0.1.9").is_err());
        assert!(check_bump("0.2.0", "0.2.0").is_err());
        assert!(check_bump("0.2.0", "").is_err());
    }
}
