use color_eyre::eyre::Error;
use pextdep::{
    Backend,
    Ops,
};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct Info {
    pub target_arch: &'static str,
    pub detected: String,
    pub selected: String,
    pub supported: Vec<String>,
}

impl Info {
    pub fn collect() -> Self {
        Self {
            target_arch: std::env::consts::ARCH,
            detected: Backend::detect().to_string(),
            selected: Ops::global().backend().to_string(),
            supported: Backend::supported()
                .map(|backend| backend.to_string())
                .collect(),
        }
    }
}

pub fn print_info() -> Result<(), Error> {
    let json = serde_json::to_string_pretty(&Info::collect())?;
    println!("{json}");
    Ok(())
}
