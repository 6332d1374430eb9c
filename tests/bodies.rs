use std::io::Write;

use relay_orbit_calculator::bodies::{
    Body, BodyCatalog, BodyError, kerbol_system_catalog, load_bodies,
};

#[test]
fn builtin_catalog_covers_the_stock_system() {
    let catalog = BodyCatalog::kerbol_system();
    assert_eq!(catalog.bodies().len(), 17);
    for name in ["Kerbol", "Kerbin", "Mun", "Jool", "Eeloo"] {
        assert!(catalog.lookup(name).is_ok(), "missing {name}");
    }

    let kerbin = catalog.lookup("Kerbin").unwrap();
    assert!(kerbin.mass_kg > 5.28e22 && kerbin.mass_kg < 5.30e22);
    assert_eq!(kerbin.radius_m, 600_000.0);
    // μ = G·M should land on the well-known 3.5316e12 m³/s².
    assert!((kerbin.mu_m3_s2() - 3.5316e12).abs() / 3.5316e12 < 1e-3);
}

#[test]
fn lookup_is_case_insensitive() {
    let catalog = kerbol_system_catalog();
    assert_eq!(catalog.lookup("kErBiN").unwrap().name, "Kerbin");
    assert_eq!(catalog.lookup("MUN").unwrap().name, "Mun");
}

#[test]
fn unknown_body_is_an_explicit_error() {
    let err = kerbol_system_catalog().lookup("Krypton").unwrap_err();
    match err {
        BodyError::Unknown(name) => assert_eq!(name, "Krypton"),
        other => panic!("expected Unknown, got {other:?}"),
    }
}

#[test]
fn merge_overrides_by_name_and_appends_new_entries() {
    let mut catalog = BodyCatalog::kerbol_system();
    catalog.merge(vec![
        Body {
            name: "Kerbin".to_string(),
            mass_kg: 6.0e22,
            radius_m: 610_000.0,
        },
        Body {
            name: "Sarnus".to_string(),
            mass_kg: 1.22e24,
            radius_m: 5_300_000.0,
        },
    ]);
    assert_eq!(catalog.bodies().len(), 18);
    assert_eq!(catalog.lookup("Kerbin").unwrap().radius_m, 610_000.0);
    assert!(catalog.lookup("Sarnus").is_ok());
}

#[test]
fn loads_bodies_from_yaml() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("temp file");
    writeln!(
        file,
        "- name: Sarnus\n  mass_kg: 1.22e24\n  radius_m: 5300000.0\n- name: Urlum\n  mass_kg: 1.79e23\n  radius_m: 2177000.0"
    )
    .expect("write yaml");

    let bodies = load_bodies(file.path()).expect("load yaml");
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0].name, "Sarnus");
    assert_eq!(bodies[1].radius_m, 2_177_000.0);
}

#[test]
fn loads_bodies_from_toml() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("extra.toml");
    std::fs::write(
        &path,
        r#"
[[bodies]]
name = "Sarnus"
mass_kg = 1.22e24
radius_m = 5300000.0
"#,
    )
    .expect("write toml");

    let bodies = load_bodies(&path).expect("load toml");
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0].name, "Sarnus");
}

#[test]
fn missing_catalog_file_reports_io_error() {
    let err = load_bodies("does/not/exist.yaml").unwrap_err();
    assert!(matches!(err, BodyError::Io(_)));
}
