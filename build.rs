use std::path::Path;
use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    let stdout = String::from_utf8(output.stdout).ok()?;
    Some(stdout.trim().to_string())
}

fn main() {
    // Rebuild when the checked-out commit changes
    if let Some(git_dir) = git(&["rev-parse", "--git-dir"]) {
        for name in ["HEAD", "packed-refs", "refs/heads", "refs/tags"] {
            if Path::new(&git_dir).join(name).exists() {
                println!("cargo:rerun-if-changed={git_dir}/{name}");
            }
        }
    }

    if let Some(info) = git(&["describe", "--always", "--tags", "--long", "--dirty"]) {
        println!("cargo:rustc-env=_GIT_INFO={info}");
    }
}
