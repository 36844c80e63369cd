use crate::add_test;
use crate::common::{md5_hex, Fixture, CHUNK_PATTERN, ONE_MB_MD5, TWO_MB_MD5};
use crate::BLOB_MB;

// Test the one megabyte blob
add_test!(one_megabyte, async {
    const FILE_NAME: &str = "blob.bin";

    let mut fixture = Fixture::new();
    let output_path = fixture.path(FILE_NAME);

    let output = fixture
        .run_cargo("gen-blob", &["-s", "1", "-o", &output_path])
        .await;
    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        format!("Wrote 1024000 bytes\nBlob md5 hash: {ONE_MB_MD5}\n")
    );

    let contents = fixture.read(FILE_NAME);
    assert_eq!(contents.len(), 8 + BLOB_MB);
    assert_eq!(&contents[..8], &(BLOB_MB as u64).to_be_bytes());
});

// Test that the header declares size * 1024000
add_test!(header_declares_length, async {
    const FILE_NAME: &str = "three.bin";

    let mut fixture = Fixture::new();
    let output_path = fixture.path(FILE_NAME);

    let output = fixture
        .run_cargo("gen-blob", &["--size", "3", "--output", &output_path])
        .await;
    assert!(output.status.success());

    let contents = fixture.read(FILE_NAME);
    let mut header = [0u8; 8];
    header.copy_from_slice(&contents[..8]);
    assert_eq!(u64::from_be_bytes(header), 3 * 1_024_000);
    assert_eq!(contents.len(), 8 + 3 * BLOB_MB);
});

// Test that the payload is the pattern and the reported hash covers only the payload
add_test!(hash_covers_payload_only, async {
    const FILE_NAME: &str = "two.bin";

    let mut fixture = Fixture::new();
    let output_path = fixture.path(FILE_NAME);

    let output = fixture
        .run_cargo("gen-blob", &["-s", "2", "-o", &output_path])
        .await;
    assert!(output.status.success());

    let contents = fixture.read(FILE_NAME);
    let payload = &contents[8..];
    assert!(payload.chunks(4).all(|word| word == CHUNK_PATTERN));
    assert_eq!(md5_hex(payload), TWO_MB_MD5);
    assert_ne!(md5_hex(&contents), TWO_MB_MD5);

    let reported = output
        .stdout
        .lines()
        .nth(1)
        .and_then(|line| line.strip_prefix("Blob md5 hash: "))
        .unwrap();
    assert_eq!(reported, TWO_MB_MD5);
});

// Test that the reported byte count is a multiple of the chunk size
add_test!(reported_bytes_are_whole_chunks, async {
    let mut fixture = Fixture::new();

    for size in [1u64, 4, 7] {
        let name = format!("blob_{size}.bin");
        let output_path = fixture.path(&name);
        let output = fixture
            .run_cargo("gen-blob", &["-s", &size.to_string(), "-o", &output_path])
            .await;
        assert!(output.status.success());

        let written: u64 = output
            .stdout
            .lines()
            .next()
            .and_then(|line| line.strip_prefix("Wrote "))
            .and_then(|rest| rest.strip_suffix(" bytes"))
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(written % 4000, 0);
        assert!(written >= size * 1_024_000);
    }
});

// Test that the generator is deterministic
add_test!(deterministic_output, async {
    let mut fixture = Fixture::new();
    let first = fixture.path("first.bin");
    let second = fixture.path("second.bin");

    let output_1 = fixture.run_cargo("gen-blob", &["-s", "1", "-o", &first]).await;
    let output_2 = fixture.run_cargo("gen-blob", &["-s", "1", "-o", &second]).await;

    assert!(output_1 == output_2);
    assert!(fixture.read("first.bin") == fixture.read("second.bin"));
});

// Test that nothing is logged by default
add_test!(quiet_stderr_by_default, async {
    let mut fixture = Fixture::new();
    let output_path = fixture.path("blob.bin");

    let output = fixture
        .run_cargo("gen-blob", &["-s", "1", "-o", &output_path])
        .await;
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
});
