//! Integration tests for vnet-subnet-layout
//!
//! These tests run the complete workflow from stored configuration to layout.

use vnet_subnet_layout::{
    app::{run, Action},
    build_layout,
    storage::{load_config, save_config},
    Configuration, Diagnostic, SegmentKind, SubnetEntry,
};

fn temp_config() -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("vnet_config.json").to_string_lossy().to_string();
    (dir, path)
}

#[test]
fn test_full_workflow_with_store() {
    let (_dir, path) = temp_config();

    // Missing store falls back to the default configuration
    let layout = run(&Action::Show, &path).expect("Failed to show default");
    assert_eq!(layout.vnet.as_ref().unwrap().cidr, "10.0.0.0/8");
    assert_eq!(layout.subnets().count(), 1);

    run(
        &Action::SetVnet {
            cidr: "10.0.0.0/24".to_string(),
        },
        &path,
    )
    .expect("Failed to set VNet");
    run(
        &Action::Delete {
            name: "default".to_string(),
            cidr: "10.0.0.1/24".to_string(),
        },
        &path,
    )
    .expect("Failed to delete default subnet");
    run(
        &Action::Add {
            name: "A".to_string(),
            cidr: "10.0.0.0/26".to_string(),
        },
        &path,
    )
    .expect("Failed to add A");
    let layout = run(
        &Action::Add {
            name: "B".to_string(),
            cidr: "10.0.0.128/26".to_string(),
        },
        &path,
    )
    .expect("Failed to add B");

    let names: Vec<&str> = layout.segments.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["A", "Unallocated", "B", "Unallocated"]);
    assert!(layout.diagnostics.is_empty());

    let stored = load_config(&path).expect("Failed to reload");
    assert_eq!(
        stored,
        Configuration::new(
            "10.0.0.0/24",
            vec![
                SubnetEntry::new("A", "10.0.0.0/26"),
                SubnetEntry::new("B", "10.0.0.128/26"),
            ]
        )
    );

    let layout = run(&Action::Reset, &path).expect("Failed to reset");
    assert_eq!(layout.vnet.as_ref().unwrap().cidr, "10.0.0.0/8");
}

#[test]
fn test_bad_entries_in_store_still_render() {
    let (_dir, path) = temp_config();
    // Hand-edited stores can hold anything; the layout must cope
    let config = Configuration::new(
        "10.0.0.0/16",
        vec![
            SubnetEntry::new("junk", "10.0.0.0/8/24"),
            SubnetEntry::new("outside", "10.1.0.0/24"),
            SubnetEntry::new("big", "10.0.0.0/17"),
            SubnetEntry::new("inside-big", "10.0.64.0/24"),
            SubnetEntry::new("top", "10.0.255.0/24"),
        ],
    );
    save_config(&path, &config).expect("Failed to save");

    let layout = build_layout(&load_config(&path).expect("Failed to load"));
    let messages: Vec<String> = layout.diagnostics.iter().map(|d| d.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "Subnet junk has invalid CIDR format: 10.0.0.0/8/24",
            "Subnet outside (10.1.0.0/24) is outside the VNet range",
            "Subnet big (10.0.0.0/17) overlaps with inside-big (10.0.64.0/24)",
        ]
    );

    let subnets: Vec<(&str, &str)> = layout
        .subnets()
        .map(|s| (s.name.as_str(), s.color))
        .collect();
    assert_eq!(
        subnets,
        vec![
            ("big", "#e74c3c"),
            ("inside-big", "#f1c40f"),
            ("top", "#9b59b6"),
        ]
    );
    let total: u64 = layout
        .segments
        .iter()
        .filter(|s| s.is_gap())
        .map(|s| s.num_addresses)
        .sum();
    assert_eq!(total, 65536 - 32768 - 256);
}

#[test]
fn test_invalid_vnet_keeps_add_available() {
    let (_dir, path) = temp_config();
    save_config(&path, &Configuration::new("10.0.0/16", vec![])).expect("Failed to save");

    let layout = run(&Action::Show, &path).expect("Show must not fail");
    assert!(layout.vnet.is_none());
    assert!(matches!(
        layout.diagnostics.as_slice(),
        [Diagnostic::ContainerInvalid { .. }]
    ));

    // Adding still works; the range check is skipped without a valid VNet
    let layout = run(
        &Action::Add {
            name: "later".to_string(),
            cidr: "10.0.1.0/24".to_string(),
        },
        &path,
    )
    .expect("Add must still work");
    assert!(layout.segments.is_empty());
    assert_eq!(load_config(&path).unwrap().subnets.len(), 1);
}

#[test]
fn test_whole_address_space() {
    let layout = build_layout(&Configuration::new(
        "0.0.0.0/0",
        vec![
            SubnetEntry::new("low", "0.0.0.0/1"),
            SubnetEntry::new("last", "255.255.255.255/32"),
        ],
    ));
    assert!(layout.diagnostics.is_empty());
    let kinds: Vec<bool> = layout
        .segments
        .iter()
        .map(|s| matches!(s.kind, SegmentKind::Gap))
        .collect();
    assert_eq!(kinds, vec![false, true, false]);
    assert_eq!(layout.segments[1].num_addresses, (1u64 << 31) - 1);
}
