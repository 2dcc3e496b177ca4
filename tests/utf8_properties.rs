//! Property tests: the vectorized validator must agree with
//! `core::str::from_utf8` on every input, on every backend, at every chunk
//! alignment.

use proptest::prelude::*;
use proptest::sample::select;
use utf8_range::utf8::{validate_utf8_report, Utf8Error, Utf8Validator};
use utf8_range::{validate_utf8, Backend, Config, Utf8ErrorKind};

/// Fragments that exercise every range index, valid and not.
const FRAGMENTS: &[&[u8]] = &[
    b"a",
    b"hello ",
    b"\n",
    b"\xC2\x80",
    b"\xDF\xBF",
    b"\xE0\xA0\x80",
    b"\xE0\x9F\xBF",
    b"\xED\x9F\xBF",
    b"\xED\xA0\x80",
    b"\xEF\xBF\xBF",
    b"\xF0\x90\x80\x80",
    b"\xF0\x8F\xBF\xBF",
    b"\xF0\x9F\x98\x80",
    b"\xF4\x8F\xBF\xBF",
    b"\xF4\x90\x80\x80",
    b"\xC0\x80",
    b"\xC1",
    b"\xF5",
    b"\xFF",
    b"\x80",
    b"\xBF",
    b"\xE2\x82",
    b"\xF0\x9F",
];

fn validators() -> Vec<Utf8Validator> {
    [Backend::Portable, Backend::Ssse3, Backend::Neon]
        .into_iter()
        .filter(|b| b.is_available())
        .map(|backend| Utf8Validator::with_config(Config { backend }))
        .collect()
}

fn fragments() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(select(FRAGMENTS), 0..48).prop_map(|parts| parts.concat())
}

/// Same verdict from every backend; returns it.
fn agreed(input: &[u8]) -> Result<(), Utf8Error> {
    let verdicts: Vec<_> = validators().iter().map(|v| v.validate(input)).collect();
    for verdict in &verdicts[1..] {
        assert_eq!(verdict, &verdicts[0], "backends disagree on {:02X?}", input);
    }
    verdicts[0]
}

proptest! {
    #[test]
    fn agrees_with_std_on_bytes(input in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(agreed(&input).is_ok(), core::str::from_utf8(&input).is_ok());
    }

    #[test]
    fn agrees_with_std_on_fragments(input in fragments()) {
        prop_assert_eq!(agreed(&input).is_ok(), core::str::from_utf8(&input).is_ok());
    }

    #[test]
    fn accepts_any_string(s in any::<String>()) {
        prop_assert_eq!(agreed(s.as_bytes()), Ok(()));
    }

    #[test]
    fn truncation_at_any_point(s in "\\PC{0,64}", cut in 0usize..256) {
        let bytes = s.as_bytes();
        let cut = cut.min(bytes.len());
        let prefix = &bytes[..cut];
        prop_assert_eq!(agreed(prefix).is_ok(), core::str::from_utf8(prefix).is_ok());
    }

    #[test]
    fn ascii_prefix_does_not_change_verdict(pad in 0usize..16, input in fragments()) {
        let mut padded = vec![b'#'; pad];
        padded.extend_from_slice(&input);
        prop_assert_eq!(agreed(&padded).is_ok(), agreed(&input).is_ok());
    }

    #[test]
    fn tail_offsets_point_at_the_std_error(input in fragments()) {
        if let Err(err) = validate_utf8(&input) {
            let std_err = core::str::from_utf8(&input).unwrap_err();
            if let Some(offset) = err.offset {
                // The fallback only sees the tail, so it can never report an
                // offset before the first real error.
                prop_assert!(offset >= std_err.valid_up_to());
                prop_assert!(err.kind.is_tail());
            } else {
                prop_assert_eq!(err.kind, Utf8ErrorKind::MalformedSequence);
            }
        }
    }

    #[test]
    fn report_covers_input(s in any::<String>()) {
        let report = validate_utf8_report(s.as_bytes()).unwrap();
        prop_assert_eq!(report.vectorized + report.residual, s.len());
        prop_assert!(report.residual < 16 + 3);
    }
}

#[test]
fn concrete_scenarios() {
    assert!(validate_utf8(b"Hello, world!").is_ok());
    assert!(validate_utf8(&[0xF0, 0x9F, 0x98, 0x80].repeat(5)).is_ok());
    assert!(validate_utf8(&[0xC0, 0x80]).is_err());
    assert!(validate_utf8(&[&b"0123456789abcdef"[..], &[0xC2u8][..]].concat()).is_err());
    assert!(validate_utf8(b"").is_ok());
    assert!(validate_utf8(&[0xE0, 0xA0]).is_err());
}

#[test]
fn illegal_leads_anywhere() {
    for lead in [0xC0u8, 0xC1, 0xF5, 0xF6, 0xF7, 0xF8, 0xF9, 0xFA, 0xFB, 0xFC, 0xFD, 0xFE, 0xFF] {
        for len in [1usize, 15, 16, 17, 31, 32, 33, 50] {
            for at in 0..len {
                let mut input = vec![b'z'; len];
                input[at] = lead;
                assert!(agreed(&input).is_err(), "lead 0x{:02X} at {} of {}", lead, at, len);
            }
        }
    }
}

#[test]
fn encoded_scalar_values_roundtrip_through_validation() {
    // A spread of scalar values, each placed at every alignment.
    let mut buf = [0u8; 4];
    for cp in (0..=0x10FFFFu32).step_by(997) {
        let Some(ch) = char::from_u32(cp) else {
            continue;
        };
        let encoded = ch.encode_utf8(&mut buf).as_bytes().to_vec();
        for pad in 0..16 {
            let mut input = vec![b' '; pad];
            input.extend_from_slice(&encoded);
            input.extend_from_slice(b"0123456789abcdef");
            assert_eq!(agreed(&input), Ok(()), "U+{:04X} pad {}", cp, pad);
        }
    }
}

#[test]
fn surrogates_rejected_at_every_alignment() {
    for hi in 0xA0u8..=0xBF {
        for pad in 0..16 {
            let mut input = vec![b' '; pad];
            input.extend_from_slice(&[0xED, hi, 0x80]);
            input.extend_from_slice(b"0123456789abcdef");
            assert!(agreed(&input).is_err(), "ED {:02X} 80 pad {}", hi, pad);
        }
    }
}
