//! Cross-scheme round-trip checks against known calendar data.

use almanac_encode::{
    decode_absolute, decode_day_offsets, decode_epoch_relative, decode_packed, decode_padded,
    encode_dst, encode_holidays, DstFacts, DstScheme, HolidayScheme, MonthDay, SLOT_COUNT,
};

/// 2020-01-01 00:00 America/New_York (EST, UTC-5).
const REFERENCE_EPOCH: i64 = 1_577_854_800;

fn md(month: u8, day: u8) -> MonthDay {
    MonthDay::new(month, day).unwrap()
}

/// US DST facts for 2023..=2026, America/New_York.
fn dst_facts() -> Vec<(i32, DstFacts)> {
    vec![
        (
            2023,
            DstFacts {
                start_day: 12,
                end_day: 5,
                start_unix: 1_678_604_400,
                end_unix: 1_699_167_600,
            },
        ),
        (
            2024,
            DstFacts {
                start_day: 10,
                end_day: 3,
                start_unix: 1_710_054_000,
                end_unix: 1_730_617_200,
            },
        ),
        (
            2025,
            DstFacts {
                start_day: 9,
                end_day: 2,
                start_unix: 1_741_503_600,
                end_unix: 1_762_066_800,
            },
        ),
        (
            2026,
            DstFacts {
                start_day: 8,
                end_day: 1,
                start_unix: 1_772_953_200,
                end_unix: 1_793_516_400,
            },
        ),
    ]
}

#[test]
fn day_offset_round_trip_across_years() {
    for (year, facts) in dst_facts() {
        let record = encode_dst(&facts, DstScheme::DayOffset).unwrap();
        assert_eq!(record.len(), 2, "width mismatch for {year}");
        let (start, end) = decode_day_offsets(&record).unwrap();
        assert_eq!((start, end), (facts.start_day, facts.end_day), "year {year}");
    }
}

#[test]
fn absolute_round_trip_across_years() {
    for (year, facts) in dst_facts() {
        let record = encode_dst(&facts, DstScheme::AbsoluteSeconds).unwrap();
        assert_eq!(record.len(), 20, "width mismatch for {year}");
        let (start, end) = decode_absolute(&record).unwrap();
        assert_eq!((start, end), (facts.start_unix, facts.end_unix), "year {year}");
    }
}

#[test]
fn epoch_relative_reproduces_absolute_instants() {
    let scheme = DstScheme::EpochRelative {
        reference_epoch: REFERENCE_EPOCH,
    };
    for (year, facts) in dst_facts() {
        let record = encode_dst(&facts, scheme).unwrap();
        assert_eq!(record.len(), 16, "width mismatch for {year}");
        // Adding the reference back must reproduce the resolver's instants.
        let (start, end) = decode_epoch_relative(&record, REFERENCE_EPOCH).unwrap();
        assert_eq!((start, end), (facts.start_unix, facts.end_unix), "year {year}");
    }
}

#[test]
fn padded_record_always_decodes_to_eleven_slots() {
    // NYSE 2022 (nine observed holidays: New Year's fell on Saturday).
    let nine = vec![
        md(1, 17),
        md(2, 21),
        md(4, 15),
        md(5, 30),
        md(6, 20),
        md(7, 4),
        md(9, 5),
        md(11, 24),
        md(12, 26),
    ];
    // NYSE 2024 (ten observed holidays).
    let ten = vec![
        md(1, 1),
        md(1, 15),
        md(2, 19),
        md(3, 29),
        md(5, 27),
        md(6, 19),
        md(7, 4),
        md(9, 2),
        md(11, 28),
        md(12, 25),
    ];

    let record = encode_holidays(&nine, HolidayScheme::Padded).unwrap();
    let slots = decode_padded(&record).unwrap();
    assert_eq!(slots.len(), SLOT_COUNT);
    assert_eq!(slots[0], None);
    assert_eq!(slots[10], None);
    let decoded: Vec<MonthDay> = slots.iter().filter_map(|s| *s).collect();
    assert_eq!(decoded, nine);

    let record = encode_holidays(&ten, HolidayScheme::Padded).unwrap();
    let slots = decode_padded(&record).unwrap();
    assert_eq!(slots[10], None);
    let decoded: Vec<MonthDay> = slots.iter().filter_map(|s| *s).collect();
    assert_eq!(decoded, ten);
}

#[test]
fn packed_matches_legacy_layout() {
    // The legacy generator folded (month << 5) | day slots MSB-first and
    // zero-filled to 24 digits. Check a hand-computed two-date record:
    // (1,1) -> 0x021, (7,4) -> 0x0e4; (0x021 << 9) | 0x0e4 = 0x42e4.
    let record = encode_holidays(&[md(1, 1), md(7, 4)], HolidayScheme::Packed).unwrap();
    assert_eq!(record, "0000000000000000000042e4");
    assert_eq!(decode_packed(&record, 2).unwrap(), vec![md(1, 1), md(7, 4)]);
}
