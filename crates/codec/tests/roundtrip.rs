//! Round-trip properties over random inputs.

use byteview_codec::{
    decode_base64, decode_binary, decode_hex, encode_base64, encode_binary, encode_hex,
    from_base64, from_binary, from_hex, to_base64, to_binary, to_hex,
};
use byteview_seq::ByteSeq;
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn binary_round_trips() {
    for _ in 0..100 {
        let blob = generate_blob();
        assert_eq!(decode_binary(&encode_binary(&blob)).unwrap(), blob);
    }
}

#[test]
fn hex_round_trips() {
    for _ in 0..100 {
        let blob = generate_blob();
        assert_eq!(decode_hex(&encode_hex(&blob)).unwrap(), blob);
    }
}

#[test]
fn base64_round_trips_for_every_length() {
    for _ in 0..100 {
        let blob = generate_blob();
        assert_eq!(decode_base64(&encode_base64(&blob)).unwrap(), blob);
    }
}

#[test]
fn base64_round_trips_for_lengths_off_a_multiple_of_three() {
    assert_eq!(decode_base64(&encode_base64(b"M")).unwrap(), b"M");
    assert_eq!(decode_base64(&encode_base64(b"Ma")).unwrap(), b"Ma");
    assert_eq!(decode_base64(&encode_base64(b"Manx")).unwrap(), b"Manx");
}

#[test]
fn sequence_level_round_trips() {
    for _ in 0..100 {
        let blob = generate_blob();
        let seq = ByteSeq::from_slice(&blob);
        assert_eq!(from_binary(&to_binary(&seq)).unwrap(), seq);
        assert_eq!(from_hex(&to_hex(&seq)).unwrap(), seq);
        assert_eq!(from_base64(&to_base64(&seq)).unwrap(), seq);
    }
}

#[test]
fn every_single_byte_value_round_trips() {
    for b in 0u8..=255 {
        let blob = [b];
        assert_eq!(decode_binary(&encode_binary(&blob)).unwrap(), blob);
        assert_eq!(decode_hex(&encode_hex(&blob)).unwrap(), blob);
        assert_eq!(decode_base64(&encode_base64(&blob)).unwrap(), blob);
    }
}
