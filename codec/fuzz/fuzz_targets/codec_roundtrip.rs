#![no_main]

use arbitrary::Arbitrary;
use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use packwire_codec::{Codec, Config, Decode, Decoder, Encode, Encoder, Error};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt::Debug,
};

#[derive(Arbitrary, Debug, Clone, PartialEq)]
struct Record {
    id: u64,
    flag: bool,
    small: i8,
    medium: i16,
    name: String,
    blob: Vec<u8>,
    fixed: [u32; 4],
    tags: BTreeSet<u16>,
    attrs: BTreeMap<String, i64>,
    pairs: Vec<(u8, String)>,
}

impl Encode for Record {
    fn write(&self, enc: &mut Encoder) {
        enc.append(&self.id)
            .append(&self.flag)
            .append(&self.small)
            .append(&self.medium)
            .append(&self.name)
            .append(&self.blob)
            .append(&self.fixed)
            .append(&self.tags)
            .append(&self.attrs)
            .append(&self.pairs);
    }
}

impl Decode for Record {
    fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
        Ok(Self {
            id: dec.extract()?,
            flag: dec.extract()?,
            small: dec.extract()?,
            medium: dec.extract()?,
            name: dec.extract()?,
            blob: dec.extract()?,
            fixed: dec.extract()?,
            tags: dec.extract()?,
            attrs: dec.extract()?,
            pairs: dec.extract()?,
        })
    }
}

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    Record(Record),
    Floats(Vec<f32>, Vec<f64>),
    Map(HashMap<u32, Vec<u8>>),
    Raw(Vec<u8>, u8),
}

fn roundtrip_record(record: Record) {
    let encoded = record.encode();
    let decoded = Record::decode(&encoded).expect("Failed to decode a successfully encoded input!");
    assert_eq!(record, decoded);

    // Every strict prefix must be rejected as truncated.
    for cut in 0..encoded.len() {
        let err = Record::decode(&encoded[..cut]).expect_err("decoded a truncated record");
        assert!(err.is_position(), "unexpected error: {err}");
    }
}

fn roundtrip_floats(singles: Vec<f32>, doubles: Vec<f64>) {
    let mut encoder = Encoder::new();
    encoder.append(&singles).append(&doubles);
    let encoded = encoder.take();

    let mut decoder = Decoder::new(&encoded);
    let all_finite = singles.iter().all(|v| v.is_finite()) && doubles.iter().all(|v| v.is_finite());
    let result = (|| {
        let s: Vec<f32> = decoder.extract()?;
        let d: Vec<f64> = decoder.extract()?;
        Ok::<_, Error>((s, d))
    })();
    match result {
        Ok((s, d)) => {
            assert!(all_finite);
            assert_eq!(s.len(), singles.len());
            assert_eq!(d.len(), doubles.len());
            assert!(decoder.is_empty());
        }
        Err(err) => {
            assert!(!all_finite);
            assert!(err.is_value());
        }
    }
}

fn roundtrip_value<T: Codec + PartialEq + Debug>(value: T) {
    let encoded = value.encode();
    let decoded = T::decode(&encoded).expect("Failed to decode a successfully encoded input!");
    assert_eq!(value, decoded);
}

fn decode_raw(raw: Vec<u8>, limit: u8) {
    // Arbitrary input may fail, but must never panic or read out of bounds.
    let cfg = Config::default().with_max_len(limit as usize);
    let _ = Record::decode_cfg(&raw, cfg);
    let _ = Record::decode(&raw);
    let _ = Bytes::decode(&raw);
    let _ = Vec::<(String, f64)>::decode(&raw);
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Record(record) => roundtrip_record(record),
        FuzzInput::Floats(singles, doubles) => roundtrip_floats(singles, doubles),
        FuzzInput::Map(map) => roundtrip_value(map),
        FuzzInput::Raw(raw, limit) => decode_raw(raw, limit),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
