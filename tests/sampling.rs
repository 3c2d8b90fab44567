use ctr_drng::{Drng, Error, RangeError};

#[test]
fn test_range_containment() {
    let mut rng = Drng::new(&[0x13u8; 16]).unwrap();
    let ranges = [
        (1, 10),
        (0, 1),
        (-10, 10),
        (-500, -400),
        (0, 255),
        (0, 256),
        (-1, 0),
        (i64::MIN, -1),
        (0, i64::MAX),
        (1_000_000, 1_000_003),
    ];

    for (min, max) in ranges {
        for _ in 0..2000 {
            let x = rng.next_int(min, max).unwrap();
            assert!(min <= x && x <= max, "{} outside [{}, {}]", x, min, max);
        }
    }
}

#[test]
fn test_small_range_hits_every_value() {
    let mut rng = Drng::new(&[0x21u8; 16]).unwrap();
    let mut hits = [0u32; 10];
    for _ in 0..5000 {
        let x = rng.next_int(1, 10).unwrap();
        hits[(x - 1) as usize] += 1;
    }
    // expected 500 per value
    assert!(hits.iter().all(|&h| h > 350 && h < 650), "{:?}", hits);
}

#[test]
fn test_degenerate_range() {
    let mut rng = Drng::new(&[0x21u8; 16]).unwrap();
    for v in [-7, 0, 7, i64::MIN, i64::MAX] {
        assert_eq!(rng.next_int(v, v), Ok(v));
    }
    assert_eq!(rng.counter(), 0);
}

#[test]
fn test_inverted_bounds() {
    let mut rng = Drng::new(&[0x21u8; 16]).unwrap();
    assert_eq!(
        rng.next_int(100, 10),
        Err(Error::Range(RangeError::InvertedBounds { min: 100, max: 10 }))
    );
}

#[test]
fn test_overflowing_bounds() {
    let mut rng = Drng::new(&[0x21u8; 16]).unwrap();
    assert!(matches!(
        rng.next_int(i64::MIN, i64::MAX),
        Err(Error::Range(RangeError::Overflow { .. }))
    ));
}

#[test]
fn test_scalar_containment() {
    let mut rng = Drng::new(&[0x34u8; 32]).unwrap();
    for _ in 0..5000 {
        let unit = rng.next_unit().unwrap();
        assert!((0.0..=1.0).contains(&unit));
        let wide = rng.next_scalar(255.0).unwrap();
        assert!((0.0..=255.0).contains(&wide));
    }
}

#[test]
fn test_scalar_is_unit_scaled() {
    let seed = [0x56u8; 16];
    let mut a = Drng::new(&seed).unwrap();
    let mut b = Drng::new(&seed).unwrap();
    for _ in 0..100 {
        let unit = a.next_unit().unwrap();
        let scaled = b.next_scalar(1024.0).unwrap();
        // scaling by a power of two is exact
        assert_eq!(unit * 1024.0, scaled);
    }
}

#[test]
fn test_top_of_domain_stays_in_range() {
    let mut rng = Drng::new(&[0x78u8; 16]).unwrap();
    for _ in 0..5000 {
        let x = rng.next_int(i64::MAX - 5, i64::MAX).unwrap();
        assert!(x >= i64::MAX - 5);
    }
}
