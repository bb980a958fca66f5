use std::{
    env::consts::{
        DLL_PREFIX,
        DLL_SUFFIX,
    },
    path::{
        Path,
        PathBuf,
    },
    process::Command,
};

use color_eyre::eyre::{
    Error,
    OptionExt,
    bail,
};

/// Name of the shared library as the bitboard runtime loads it, without the
/// platform suffix.
const LIBRARY_NAME: &str = "bmi2_bitops";

fn workspace_root() -> Result<PathBuf, Error> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(ToOwned::to_owned)
        .ok_or_eyre("xtask manifest has no parent directory")
}

pub fn dist(release: bool, software_only: bool, output: impl AsRef<Path>) -> Result<(), Error> {
    let root = workspace_root()?;
    let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_owned());

    let mut command = Command::new(cargo);
    command
        .current_dir(&root)
        .args(["build", "--package", "pextdep-ffi"]);
    if release {
        command.arg("--release");
    }
    if software_only {
        command.args(["--features", "software-only"]);
    }

    tracing::debug!(?command, "building shared library");
    let status = command.status()?;
    if !status.success() {
        bail!("`cargo build` failed: {status}");
    }

    let target_dir = std::env::var_os("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| root.join("target"));
    let profile = if release { "release" } else { "debug" };
    let built = target_dir
        .join(profile)
        .join(format!("{DLL_PREFIX}{LIBRARY_NAME}{DLL_SUFFIX}"));

    let output = output.as_ref();
    std::fs::create_dir_all(output)?;
    let destination = output.join(format!("{LIBRARY_NAME}{DLL_SUFFIX}"));

    tracing::debug!(from = %built.display(), to = %destination.display(), "copying shared library");
    std::fs::copy(&built, &destination)?;
    tracing::info!(path = %destination.display(), "shared library ready");

    Ok(())
}
