//! Integration tests for ipv4-subnet-tools
//!
//! These tests exercise the public API end to end: cross-representation
//! parsing, subnet arithmetic and the serde string forms.

use ipv4_subnet_tools::{Address, Bin32, Error, Netmask, Subnet};

#[test]
fn test_cross_representation_equivalence() {
    let from_quad = Bin32::parse("192.168.1.1").expect("dotted quad should parse");
    let from_hex = Bin32::parse("0xc0a80101").expect("hex should parse");
    let from_bin =
        Bin32::parse("11000000101010000000000100000001").expect("binary should parse");

    assert_eq!(from_quad, from_hex);
    assert_eq!(from_quad, from_bin);
    assert!(from_quad.matches("0xC0A80101"));
    assert!(from_quad.matches("192.168.1.1"));

    // round trips normalize
    assert_eq!(from_quad.to_dotted_quad(), "192.168.1.1");
    assert_eq!(from_quad.to_hex_str(), "0xc0a80101");
    assert_eq!(
        from_quad.to_binary_str(),
        "11000000101010000000000100000001"
    );
    assert_eq!(
        Bin32::parse("192.168.001.001")
            .expect("leading zeros accepted")
            .to_dotted_quad(),
        "192.168.1.1"
    );
}

#[test]
fn test_subnet_planning_workflow() {
    // carve a /24 out of a corporate /8 and walk its host range
    let corp = Subnet::parse("10.0.0.0/8").expect("corp range should parse");
    let lan = Subnet::from_parts("10.1.2.99", "24").expect("lan should parse");

    assert_eq!(lan.to_string(), "10.1.2.0/24");
    assert!(corp.contains_subnet(&lan));
    assert!(!lan.contains_subnet(&corp));

    let first = lan.first_host().expect("a /24 has a first host");
    let last = lan.last_host().expect("a /24 has a last host");
    let broadcast = lan.broadcast().expect("a /24 has a broadcast");
    assert_eq!(first.to_dotted_quad(), "10.1.2.1");
    assert_eq!(last.to_dotted_quad(), "10.1.2.254");
    assert_eq!(broadcast.to_dotted_quad(), "10.1.2.255");
    assert_eq!(lan.num_hosts(), 254);

    // every address from first to last is inside the subnet
    let mut addr = first;
    let mut count = 1u64;
    while addr < last {
        assert!(lan.contains_address(&addr));
        addr = addr.increment().expect("walk stays below the broadcast");
        count += 1;
    }
    assert_eq!(count, lan.num_hosts());

    // but the surrounding addresses are not usable hosts
    assert!(lan.contains_ip("10.1.2.0"));
    assert!(lan.contains_ip("10.1.2.255"));
    assert!(!lan.contains_ip("10.1.3.0"));
    assert_eq!(
        first.decrement().expect("network address").to_dotted_quad(),
        "10.1.2.0"
    );
}

#[test]
fn test_mask_forms_agree() {
    let by_prefix = Subnet::from_parts("172.16.0.0", "16").expect("prefix mask");
    let by_quad = Subnet::parse("172.16.0.0/255.255.0.0").expect("dotted mask");
    let by_hex = Subnet::from_parts("0xac100000", "0xffff0000").expect("hex parts");

    assert_eq!(by_prefix, by_quad);
    assert_eq!(by_prefix, by_hex);
    assert_eq!(by_prefix.as_star_notation().expect("/16 is byte aligned"), "172.16.*.*");
    assert!(by_prefix.mask().matches("16"));
    assert!(by_prefix.mask().matches("255.255.0.0"));
}

#[test]
fn test_error_taxonomy() {
    assert!(matches!(
        Subnet::parse("not/a/subnet").unwrap_err(),
        Error::Parse { .. }
    ));
    assert!(matches!(
        Netmask::parse("255.0.255.0").unwrap_err(),
        Error::Parse { .. }
    ));
    assert!(matches!(
        Address::parse("255.255.255.255")
            .unwrap()
            .increment()
            .unwrap_err(),
        Error::Overflow { .. }
    ));
    assert!(matches!(
        Subnet::parse("10.0.0.5/32").unwrap().broadcast().unwrap_err(),
        Error::HostRange { .. }
    ));
    assert!(matches!(
        Subnet::parse("10.0.0.0/12")
            .unwrap()
            .as_star_notation()
            .unwrap_err(),
        Error::Range { .. }
    ));

    // errors render something a caller can show to a user
    let err = Subnet::parse("10.0.0.0/33").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_serde_round_trips() {
    let subnet = Subnet::parse("192.168.1.5/24").expect("subnet should parse");
    let json = serde_json::to_string(&subnet).expect("serialize subnet");
    assert_eq!(json, "\"192.168.1.0/24\"");
    let back: Subnet = serde_json::from_str(&json).expect("deserialize subnet");
    assert_eq!(back, subnet);

    let addr: Address = serde_json::from_str("\"10.1.2.3\"").expect("deserialize address");
    assert_eq!(addr.to_dotted_quad(), "10.1.2.3");
    assert_eq!(
        serde_json::to_string(&addr).expect("serialize address"),
        "\"10.1.2.3\""
    );

    // netmask deserialization accepts any netmask form
    let mask: Netmask = serde_json::from_str("\"24\"").expect("prefix form");
    assert_eq!(mask.prefix_len(), 24);
    assert_eq!(
        serde_json::to_string(&mask).expect("serialize netmask"),
        "\"255.255.255.0\""
    );

    assert!(serde_json::from_str::<Subnet>("\"10.0.0.0\"").is_err());
    assert!(serde_json::from_str::<Netmask>("\"255.0.255.0\"").is_err());
}

#[test]
fn test_sorted_order() {
    let mut subnets = vec![
        Subnet::parse("10.0.10.64/26").unwrap(),
        Subnet::parse("10.0.0.0/8").unwrap(),
        Subnet::parse("192.168.1.0/24").unwrap(),
        Subnet::parse("10.0.10.0/24").unwrap(),
    ];
    subnets.sort();

    let rendered: Vec<String> = subnets.iter().map(|s| s.to_string()).collect();
    assert_eq!(
        rendered,
        vec!["10.0.0.0/8", "10.0.10.0/24", "10.0.10.64/26", "192.168.1.0/24"]
    );
}
