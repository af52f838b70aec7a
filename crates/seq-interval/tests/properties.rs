// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use seq_interval::{DirectedInterval, Direction, IntervalError};

struct Fixture {
    iv1: DirectedInterval<i64>,
    iv2: DirectedInterval<i64>,
    iv1_r: DirectedInterval<i64>,
    iv2_r: DirectedInterval<i64>,
    iv3: DirectedInterval<i64>,
    iv4: DirectedInterval<i64>,
}

//  iv1 |---------->
//      1          10
//  iv2      |----------->
//           5           15
//  iv3   |----->
//        3     8
//  iv4             |------------->
//                  11            20
fn fixture() -> Fixture {
    Fixture {
        iv1: DirectedInterval::new(1, 10),
        iv2: DirectedInterval::new(5, 15),
        iv1_r: DirectedInterval::new(10, 1),
        iv2_r: DirectedInterval::new(15, 5),
        iv3: DirectedInterval::new(3, 8),
        iv4: DirectedInterval::new(11, 20),
    }
}

fn samples() -> Vec<DirectedInterval<i64>> {
    let mut out = Vec::new();
    for start in -3..=3 {
        for end in -3..=3 {
            out.push(DirectedInterval::new(start, end));
        }
    }
    out
}

#[test]
fn test_equality_is_pointwise() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a == b, a.start() == b.start() && a.end() == b.end());
        }
    }
    let f = fixture();
    assert_ne!(f.iv1, f.iv1_r);
}

#[test]
fn test_length() {
    let f = fixture();
    assert_eq!(f.iv1.length(), 10);
    assert_eq!(f.iv1_r.length(), 10);
    assert_eq!(f.iv3.length(), 6);
}

#[test]
fn test_intersection_is_reflexive() {
    for mut a in samples() {
        assert!(a.is_intersect_with(&a));
        assert!(a.is_intersect_with(&a.reversed()));
        a.reverse();
        assert!(a.is_intersect_with(&a));
    }
}

#[test]
fn test_intersect_and_adjacent() {
    let f = fixture();
    assert!(f.iv1.is_intersect_with(&f.iv2));
    assert!(!f.iv3.is_intersect_with(&f.iv4));
    assert!(f.iv1.is_adjacent_with(&f.iv4));
    assert!(!f.iv1.is_adjacent_with(&f.iv2));
}

#[test]
fn test_union() {
    let f = fixture();
    assert_eq!(f.iv1 + f.iv2, Ok(DirectedInterval::new(1, 15)));
    assert_eq!(f.iv1_r + f.iv2_r, Ok(DirectedInterval::new(15, 1)));
    assert_eq!(
        f.iv1 + f.iv2_r,
        Err(IntervalError::DirectionMismatch {
            left: Direction::Forward,
            right: Direction::Backward,
        })
    );
    assert_eq!(
        f.iv3 + DirectedInterval::new(12, 20),
        Err(IntervalError::NoIntersection)
    );
}

#[test]
fn test_difference() {
    let f = fixture();
    assert!(matches!(
        f.iv1 - f.iv2_r,
        Err(IntervalError::DirectionMismatch { .. })
    ));
    assert_eq!(f.iv3 - f.iv4, Err(IntervalError::NoIntersection));
    assert_eq!(f.iv1 - f.iv3, Err(IntervalError::UndefinedRemainder));
    assert_eq!(f.iv1 - f.iv2, Ok(Some(DirectedInterval::new(1, 4))));
    assert_eq!(f.iv2 - f.iv1, Ok(Some(DirectedInterval::new(11, 15))));
    assert_eq!(f.iv1_r - f.iv2_r, Ok(Some(DirectedInterval::new(4, 1))));
    assert_eq!(f.iv2_r - f.iv1_r, Ok(Some(DirectedInterval::new(15, 11))));
    assert_eq!(f.iv1 - DirectedInterval::new(1, 5), Ok(Some(DirectedInterval::new(6, 10))));
    assert_eq!(f.iv1 - DirectedInterval::new(6, 10), Ok(Some(DirectedInterval::new(1, 5))));
    assert_eq!(f.iv1 - f.iv1, Ok(None));
    assert_eq!(
        DirectedInterval::new(3, 10) - f.iv1,
        Err(IntervalError::UndefinedRemainder)
    );
}

#[test]
fn test_reverse_round_trip() {
    for a in samples() {
        let mut b = a;
        b.reverse();
        b.reverse();
        assert_eq!(b, a);
        assert_eq!(b.direction(), a.direction());
        assert_eq!((b.low(), b.high()), (a.low(), a.high()));
    }

    let mut f = fixture();
    let iv1_copy = f.iv1;
    f.iv1.reverse();
    assert_eq!(f.iv1, f.iv1_r);
    f.iv2.reverse();
    assert_eq!(f.iv2, f.iv2_r);
    assert_ne!(f.iv1, iv1_copy);
}

#[test]
fn test_containment() {
    let f = fixture();
    assert!(f.iv1.contains(5_i64));
    assert!(!f.iv1.contains(12_i64));
    assert!(f.iv1.contains(f.iv3));
    assert!(f.iv1.contains(DirectedInterval::new(1, 1)));
    assert!(f.iv1.contains(DirectedInterval::new(10, 10)));
    assert!(!f.iv1.contains(f.iv4));
    assert_eq!(f.iv1.contains_value(&5.0_f64), Ok(true));
    assert_eq!(f.iv1.contains_value(&12.0_f64), Ok(false));
    assert!(matches!(
        f.iv1.contains_value(&"test"),
        Err(IntervalError::TypeMismatch { .. })
    ));
    assert!(matches!(
        f.iv1.contains_value(&String::from("test")),
        Err(IntervalError::TypeMismatch { .. })
    ));
}

#[test]
fn test_intersect_is_idempotent() {
    for a in samples() {
        assert_eq!(a.intersect(&a), Ok(Some(a)));
    }
}

#[test]
fn test_failed_operations_leave_operands_untouched() {
    let f = fixture();
    let (a, b) = (f.iv1, f.iv3);
    assert!(a.subtract(&b).is_err());
    assert!(a.union(&f.iv2_r).is_err());
    assert_eq!(a, DirectedInterval::new(1, 10));
    assert_eq!(b, DirectedInterval::new(3, 8));
}

#[test]
fn test_rejections_are_traced() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    let f = fixture();
    assert!((f.iv1 + f.iv2_r).is_err());
    assert!(f.iv1.contains_value(&()).is_err());
}
