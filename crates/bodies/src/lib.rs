//! Celestial body catalog for the Kerbol system.
//!
//! Ships the stock bodies as a built-in table and supports loading extra or
//! overriding entries from YAML/TOML catalog files.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A celestial body as the planner sees it: a point mass with a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    pub mass_kg: f64,
    pub radius_m: f64,
}

impl Body {
    /// Standard gravitational parameter μ = G·M (m³/s²).
    pub fn mu_m3_s2(&self) -> f64 {
        relay_core::constants::G * self.mass_kg
    }
}

/// Errors that can occur while looking up or loading bodies.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("body '{0}' not found in catalog")]
    Unknown(String),
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Stock Kerbol-system values (KSP wiki, SI units).
const KERBOL_SYSTEM: &[(&str, f64, f64)] = &[
    ("Kerbol", 1.756_545_9e28, 261_600_000.0),
    ("Moho", 2.526_331_4e21, 250_000.0),
    ("Eve", 1.224_398_0e23, 700_000.0),
    ("Gilly", 1.242_036_3e17, 13_000.0),
    ("Kerbin", 5.291_515_8e22, 600_000.0),
    ("Mun", 9.759_906_6e20, 200_000.0),
    ("Minmus", 2.645_758_0e19, 60_000.0),
    ("Duna", 4.515_427_0e21, 320_000.0),
    ("Ike", 2.782_161_5e20, 130_000.0),
    ("Dres", 3.219_093_7e20, 138_000.0),
    ("Jool", 4.233_212_7e24, 6_000_000.0),
    ("Laythe", 2.939_731_1e22, 500_000.0),
    ("Vall", 3.108_765_5e21, 300_000.0),
    ("Tylo", 4.233_212_7e22, 600_000.0),
    ("Bop", 3.726_109_0e19, 65_000.0),
    ("Pol", 1.081_350_7e19, 44_000.0),
    ("Eeloo", 1.114_922_4e21, 210_000.0),
];

/// An ordered collection of bodies with name-keyed lookup.
#[derive(Debug, Clone, Default)]
pub struct BodyCatalog {
    bodies: Vec<Body>,
}

impl BodyCatalog {
    /// Catalog of the stock Kerbol-system bodies.
    pub fn kerbol_system() -> Self {
        let bodies = KERBOL_SYSTEM
            .iter()
            .map(|(name, mass_kg, radius_m)| Body {
                name: (*name).to_string(),
                mass_kg: *mass_kg,
                radius_m: *radius_m,
            })
            .collect();
        Self { bodies }
    }

    /// Build a catalog from explicit entries.
    pub fn from_bodies(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    /// Case-insensitive lookup; unknown names error out instead of defaulting.
    pub fn lookup(&self, name: &str) -> Result<&Body, BodyError> {
        let upper = name.to_uppercase();
        self.bodies
            .iter()
            .find(|body| body.name.to_uppercase() == upper)
            .ok_or_else(|| BodyError::Unknown(name.to_string()))
    }

    /// Replace same-named entries and append the rest.
    pub fn merge(&mut self, extra: Vec<Body>) {
        for body in extra {
            let upper = body.name.to_uppercase();
            match self
                .bodies
                .iter_mut()
                .find(|existing| existing.name.to_uppercase() == upper)
            {
                Some(existing) => *existing = body,
                None => self.bodies.push(body),
            }
        }
    }

    /// All bodies in catalog order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }
}

/// Process-wide read-only copy of the stock catalog.
pub fn kerbol_system_catalog() -> &'static BodyCatalog {
    static CATALOG: OnceLock<BodyCatalog> = OnceLock::new();
    CATALOG.get_or_init(BodyCatalog::kerbol_system)
}

/// Load body entries from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<Body>, BodyError> {
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_bodies(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let catalog: TomlCatalog = toml::from_str(&contents)?;
        Ok(catalog.bodies)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// TOML catalogs wrap entries in a `[[bodies]]` array of tables.
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    bodies: Vec<Body>,
}

fn read_dir_bodies(dir: &Path) -> Result<Vec<Body>, BodyError> {
    let mut bodies = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let catalog: TomlCatalog = toml::from_str(&contents)?;
        bodies.extend(catalog.bodies);
    }
    Ok(bodies)
}
