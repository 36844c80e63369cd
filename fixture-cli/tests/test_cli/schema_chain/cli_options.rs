use crate::add_test;
use crate::common::{Fixture, USAGE_ERROR_STATUS};

// Test the count and directory options together
add_test!(count_and_directory, async {
    let mut fixture = Fixture::new();

    let output = fixture
        .run_cargo("schema-chain", &["-n", "3", "-C", "nested/out"])
        .await;
    assert!(output.status.success());

    assert_eq!(
        fixture.list("nested/out"),
        vec![
            "chain_001.dfdl.xsd".to_string(),
            "chain_002.dfdl.xsd".to_string(),
            "chain_003.dfdl.xsd".to_string(),
        ]
    );
    assert!(!fixture.file_exists("chain_001.dfdl.xsd"));
    assert!(!fixture
        .read_to_string("nested/out/chain_003.dfdl.xsd")
        .contains("xs:include"));
});

// Test long option spellings and an absolute directory
add_test!(long_options, async {
    let mut fixture = Fixture::new();
    let dir = fixture.root_dir_path().join("abs");
    let dir = dir.display().to_string();

    let output = fixture
        .run_cargo("schema-chain", &["--count", "2", "--directory", &dir])
        .await;
    assert!(output.status.success());
    assert_eq!(fixture.list("abs").len(), 2);
});

// Test that the include prefix is configurable
add_test!(custom_include_prefix, async {
    let mut fixture = Fixture::new();

    let output = fixture
        .run_cargo("schema-chain", &["-n", "2", "--include-prefix", "schemas/"])
        .await;
    assert!(output.status.success());

    let first = fixture.read_to_string("chain_001.dfdl.xsd");
    assert!(first.contains("<xs:include schemaLocation=\"schemas/chain_002.dfdl.xsd\"/>"));
});

// Test that an empty chain is a usage error
add_test!(zero_count_is_usage_error, async {
    let mut fixture = Fixture::new();

    let output = fixture.run_cargo("schema-chain", &["-n", "0"]).await;
    assert_eq!(output.status.code(), Some(USAGE_ERROR_STATUS));
    assert!(fixture.list("").is_empty());
});

// Test that non-numeric counts are usage errors
add_test!(invalid_count_is_usage_error, async {
    let mut fixture = Fixture::new();

    for count in ["ten", "1000000000000", ""] {
        let output = fixture.run_cargo("schema-chain", &["-n", count]).await;
        assert_eq!(output.status.code(), Some(USAGE_ERROR_STATUS), "count {count:?}");
    }
    assert!(fixture.list("").is_empty());
});

// Test that -v reports the chain on stderr only
add_test!(verbose_logs_to_stderr, async {
    let mut fixture = Fixture::new();

    let output = fixture.run_cargo("schema-chain", &["-v", "-n", "4"]).await;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("wrote 4 files"));
});

// Test --help
add_test!(help, async {
    let mut fixture = Fixture::new();

    let output = fixture.run_cargo("schema-chain", &["--help"]).await;
    assert!(output.status.success());
    assert!(output.stdout.contains("--count"));
    assert!(output.stdout.contains("--include-prefix"));
});
