use sha256_modified::{Digest, HashError, Message, sha256, sha256_any};

fn expect_sha256_hex(input: &[u8], expected: &str) {
    let got = sha256(input);

    assert_eq!(
        got.to_hex(),
        expected,
        "Digest mismatch for input {:?}\nExpected {}\nGot      {}",
        input,
        expected,
        got,
    );
}

// -------------------------------------------------------
// 1. OFFICIAL VECTOR TESTS
// -------------------------------------------------------

#[test]
fn sha256_empty_vector() {
    expect_sha256_hex(
        b"",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    );
}

#[test]
fn sha256_abc_vector() {
    expect_sha256_hex(
        b"abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    );
}

#[test]
fn sha256_two_block_vector() {
    expect_sha256_hex(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    );
}

#[test]
fn sha256_known_phrase() {
    expect_sha256_hex(
        b"The quick brown fox jumps over the lazy dog",
        "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
    );
}

#[test]
fn sha256_million_a() {
    let buf = vec![b'a'; 1_000_000];

    expect_sha256_hex(
        &buf,
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    );
}

// -------------------------------------------------------
// 2. INPUT KINDS
// -------------------------------------------------------

#[test]
fn sha256_text_and_bytes_agree() {
    let owned = String::from("hello world");
    let bytes = owned.clone().into_bytes();

    let expected = sha256(b"hello world");

    assert_eq!(sha256("hello world"), expected);
    assert_eq!(sha256(&owned), expected);
    assert_eq!(sha256(&bytes), expected);
    assert_eq!(sha256(Message::Text("hello world")), expected);
    assert_eq!(
        expected.to_hex(),
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
}

#[test]
fn sha256_any_accepts_text_and_bytes() {
    let text = String::from("abc");
    let bytes: Vec<u8> = b"abc".to_vec();

    assert_eq!(sha256_any(&text).unwrap(), sha256("abc"));
    assert_eq!(sha256_any(&bytes).unwrap(), sha256("abc"));
}

#[test]
fn sha256_any_accepts_byte_arrays_and_boxed_text() {
    let literal: &'static [u8; 3] = b"abc";
    let owned: [u8; 3] = *b"abc";
    let boxed: Box<str> = Box::from("abc");
    let shared: &'static String = Box::leak(Box::new(String::from("abc")));

    let expected = sha256("abc");

    assert_eq!(sha256_any(&literal), Ok(expected));
    assert_eq!(sha256_any(&owned), Ok(expected));
    assert_eq!(sha256_any(&boxed), Ok(expected));
    assert_eq!(sha256_any(&shared), Ok(expected));

    // Static and runtime-typed entry points agree on arrays.
    assert_eq!(sha256_any(&owned), Ok(sha256(&owned)));
}

#[test]
fn sha256_any_rejects_numeric_input() {
    assert!(matches!(
        sha256_any(&42u64),
        Err(HashError::InvalidInputType { .. })
    ));
    assert!(matches!(
        sha256_any(&3.25f32),
        Err(HashError::InvalidInputType { .. })
    ));
}

#[test]
fn sha256_any_rejects_other_collections() {
    let words: Vec<u32> = vec![1, 2, 3];

    let err = sha256_any(&words).unwrap_err();
    assert!(err.to_string().contains("invalid input type"));
}

// -------------------------------------------------------
// 3. LENGTHS AND BLOCK BOUNDARIES
// -------------------------------------------------------

#[test]
fn sha256_fixed_length_output() {
    let mut buf: Vec<u8> = Vec::with_capacity(300);
    for i in 0..300 {
        let digest = sha256(&buf);
        assert_eq!(digest.as_bytes().len(), Digest::LEN);
        buf.push(i as u8);
    }
}

#[test]
fn sha256_padding_boundaries_are_distinct() {
    // 55, 56 and 64 bytes straddle the one/two block padding boundary.
    let digests: Vec<Digest> = [55usize, 56, 63, 64, 65]
        .iter()
        .map(|&len| sha256(&vec![0x11u8; len]))
        .collect();

    for (i, a) in digests.iter().enumerate() {
        for b in &digests[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn sha256_single_bytes() {
    let mut seen = std::collections::HashSet::new();

    for b in 0u8..=255 {
        assert!(seen.insert(sha256(&[b])));
    }
}

// -------------------------------------------------------
// 4. SENSITIVITY
// -------------------------------------------------------

#[test]
fn sha256_single_bit_flip_changes_digest() {
    // 'c' ^ 0x01 == 'b'
    assert_ne!(sha256("abc"), sha256("abb"));
    assert_ne!(sha256(b""), sha256(&[0x01u8]));
}

#[test]
fn sha256_neighbouring_input_vector() {
    assert_eq!(
        sha256("abd").to_hex(),
        "a52d159f262b2c6ddb724a61840befc36eb30c88877a4030b65cbe86298449c9"
    );
}
