//! Integration tests for user-defined records.

use bytes::Bytes;
use packwire_codec::{Codec, Config, Decode, Decoder, Encode, Encoder, Error};
use std::{
    collections::{BTreeMap, HashMap},
    fmt::Debug,
};

#[derive(Debug, Clone, PartialEq)]
struct Header {
    id: u64,
    kind: u8,
    urgent: bool,
}

impl Encode for Header {
    fn write(&self, enc: &mut Encoder) {
        enc.append(&self.id).append(&self.kind).append(&self.urgent);
    }
}

impl Decode for Header {
    fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
        Ok(Self {
            id: dec.extract()?,
            kind: dec.extract()?,
            urgent: dec.extract()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Sample {
    label: String,
    readings: [f32; 3],
    weight: f64,
}

impl Encode for Sample {
    fn write(&self, enc: &mut Encoder) {
        enc.append(&self.label)
            .append(&self.readings)
            .append(&self.weight);
    }
}

impl Decode for Sample {
    fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
        Ok(Self {
            label: dec.extract()?,
            readings: dec.extract()?,
            weight: dec.extract()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Batch {
    header: Header,
    samples: Vec<Sample>,
    index: BTreeMap<String, Vec<u32>>,
    attachments: HashMap<u16, Bytes>,
    checksum: i32,
}

impl Encode for Batch {
    fn write(&self, enc: &mut Encoder) {
        enc.append(&self.header)
            .append(&self.samples)
            .append(&self.index)
            .append(&self.attachments)
            .append(&self.checksum);
    }
}

impl Decode for Batch {
    fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
        let header = dec.extract()?;
        let samples = dec.extract()?;
        let index = dec.extract()?;
        let attachments = dec.extract()?;
        let checksum = dec.extract()?;
        Ok(Self {
            header,
            samples,
            index,
            attachments,
            checksum,
        })
    }
}

/// A record that only cares about the trailing field and skips the rest.
struct Trailer {
    checksum: i32,
}

impl Decode for Trailer {
    fn read(dec: &mut Decoder<'_>) -> Result<Self, Error> {
        let skip = dec.remaining().saturating_sub(std::mem::size_of::<i32>());
        dec.ignore(skip)?;
        Ok(Self {
            checksum: dec.extract()?,
        })
    }
}

/// Appends `value` to a fresh encoder and decodes the finished record back.
fn round_trip<T: Codec + PartialEq + Debug>(value: &T) {
    let mut encoder = Encoder::new();
    encoder.append(value);
    let record = encoder.take();
    assert_eq!(&T::decode(&record).unwrap(), value);

    let mut decoder = Decoder::new(&record);
    assert_eq!(&decoder.extract::<T>().unwrap(), value);
    assert!(decoder.is_empty());
}

fn sample(label: &str, seed: f32) -> Sample {
    Sample {
        label: label.to_string(),
        readings: [seed, seed * 2.0, -seed],
        weight: f64::from(seed) / 3.0,
    }
}

fn batch() -> Batch {
    let mut index = BTreeMap::new();
    index.insert("even".to_string(), vec![0, 2, 4]);
    index.insert("odd".to_string(), vec![1, 3]);
    index.insert("none".to_string(), vec![]);

    let mut attachments = HashMap::new();
    attachments.insert(1, Bytes::from_static(b"first"));
    attachments.insert(500, Bytes::from(vec![0xAB; 400]));

    Batch {
        header: Header {
            id: 0x0123_4567_89AB_CDEF,
            kind: 7,
            urgent: true,
        },
        samples: (0..5).map(|i| sample(&format!("s{i}"), i as f32)).collect(),
        index,
        attachments,
        checksum: -12345,
    }
}

#[test]
fn test_nested_round_trip() {
    let value = batch();
    let mut encoder = Encoder::new();
    encoder.append(&value);
    let record = encoder.take();
    assert!(encoder.is_empty());

    let mut decoder = Decoder::new(&record);
    let decoded: Batch = decoder.extract().unwrap();
    assert!(decoder.is_empty());
    assert_eq!(decoded, value);
    assert_eq!(Batch::decode(&record).unwrap(), value);
}

#[test]
fn test_deeply_nested_round_trip() {
    let value: Vec<BTreeMap<u8, Vec<Header>>> = vec![
        BTreeMap::new(),
        BTreeMap::from([(
            1,
            vec![
                batch().header,
                Header {
                    id: 0,
                    kind: 0,
                    urgent: false,
                },
            ],
        )]),
    ];
    round_trip(&value);
}

#[test]
fn test_round_trip_mixed_values() {
    round_trip(&batch());
    round_trip(&sample("", 0.25));
    round_trip(&String::new());
    round_trip(&"y".repeat(256));
    round_trip(&Bytes::from(vec![7u8; 255]));
    round_trip(&[[1i64, -1], [i64::MAX, i64::MIN]]);
    round_trip(&(0u8..=254).collect::<Vec<_>>());
    round_trip(&(batch().header, vec![sample("a", 1.5), sample("b", -2.0)]));
}

#[test]
fn test_record_layout_has_no_framing() {
    let header = Header {
        id: 1,
        kind: 2,
        urgent: true,
    };
    let mut expected = Vec::new();
    expected.extend_from_slice(&1u64.to_ne_bytes());
    expected.push(2);
    expected.push(1);
    assert_eq!(&header.encode()[..], &expected[..]);
}

#[test]
fn test_truncation_at_every_offset() {
    let record = batch().encode();
    for cut in 0..record.len() {
        let err = Batch::decode(&record[..cut]).unwrap_err();
        assert!(err.is_position(), "cut at {cut}: {err}");
    }
}

#[test]
fn test_trailing_bytes() {
    let mut encoder = Encoder::new();
    encoder.append(&batch()).append(&0u8);
    let record = encoder.take();
    assert_eq!(Batch::decode(&record), Err(Error::TrailingData(1)));

    // Reading through a decoder leaves the extra byte for the caller.
    let mut decoder = Decoder::new(&record);
    decoder.extract::<Batch>().unwrap();
    assert_eq!(decoder.remaining(), 1);
}

#[test]
fn test_nested_error_propagates_unchanged() {
    let mut value = batch();
    value.samples[2].readings[1] = f32::NAN;
    let record = value.encode();
    assert_eq!(
        Batch::decode(&record),
        Err(Error::Value("f32", "non-finite value"))
    );

    let mut value = batch();
    value.samples[4].weight = f64::NEG_INFINITY;
    let record = value.encode();
    assert_eq!(
        Batch::decode(&record),
        Err(Error::Value("f64", "non-finite value"))
    );
}

#[test]
fn test_partial_failure_keeps_destination() {
    let mut value = batch();
    value.samples[2].weight = f64::NAN;
    let record = value.samples.encode();

    let mut dst = vec![sample("existing", 9.0)];
    let before = dst.clone();
    let mut decoder = Decoder::new(&record);
    assert!(decoder.extract_into(&mut dst).unwrap_err().is_value());
    assert_eq!(dst, before);
}

#[test]
fn test_ignore_fields() {
    let value = batch();
    let record = value.encode();
    let trailer = Trailer::decode(&record).unwrap();
    assert_eq!(trailer.checksum, value.checksum);

    // Skip the header explicitly, then read the samples.
    let mut decoder = Decoder::new(&record);
    decoder.ignore(8 + 1 + 1).unwrap();
    let samples: Vec<Sample> = decoder.extract().unwrap();
    assert_eq!(samples, value.samples);

    let mut decoder = Decoder::new(&record);
    assert!(decoder.ignore(record.len() + 1).unwrap_err().is_position());
}

#[test]
fn test_limit_applies_to_nested_containers() {
    let record = batch().encode();
    // The largest prefix in the record is the 400-byte attachment.
    let cfg = Config::default().with_max_len(399);
    assert_eq!(
        Batch::decode_cfg(&record, cfg),
        Err(Error::LengthExceeded(400, 399))
    );
    let cfg = Config::default().with_max_len(400);
    assert_eq!(Batch::decode_cfg(&record, cfg).unwrap(), batch());
}

#[test]
fn test_contents_before_and_after_append() {
    let mut encoder = Encoder::new();
    assert_eq!(encoder.contents(), Err(Error::EmptyBuffer));
    encoder.append(&0x11u8);
    assert_eq!(encoder.contents().unwrap(), &[0x11]);
    encoder.append(&Header {
        id: 3,
        kind: 4,
        urgent: false,
    });
    assert_eq!(encoder.contents().unwrap().len(), 1 + 8 + 1 + 1);
}

#[cfg(target_endian = "little")]
#[test]
fn test_sequence_scenario() {
    let mut encoder = Encoder::new();
    encoder.append(&vec![1u32, 300, 70000]);
    let record = encoder.take();
    assert_eq!(
        &record[..],
        &[0x03, 0x01, 0x00, 0x00, 0x00, 0x2C, 0x01, 0x00, 0x00, 0x70, 0x11, 0x01, 0x00]
    );

    let mut decoder = Decoder::new(&record);
    let mut decoded: Vec<u32> = Vec::new();
    decoder.extract_into(&mut decoded).unwrap();
    assert_eq!(decoded, vec![1u32, 300, 70000]);
    assert!(decoder.is_empty());
}
