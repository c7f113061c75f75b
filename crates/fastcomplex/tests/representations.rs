//! Tests that the value, accumulator and array representations agree.
//!
//! Every in-place operation must store exactly (bit for bit) what the
//! value-returning operation on `Complex` computes, regardless of operand
//! shape. Also covers array indexing faults and same-slot aliasing.

use fastcomplex::{
    BinaryOp, Complex, ComplexArray, ComplexBuffer, ComplexError, ComplexNumber, ComplexNumberArray, ComplexSlot,
    UnaryOp,
};
use strum::IntoEnumIterator;

const VALUES: [(f64, f64); 6] = [
    (3.0, 4.0),
    (-1.5, -0.0),
    (0.0, 2.0),
    (0.25, -0.75),
    (f64::INFINITY, 1.0),
    (f64::NAN, 0.0),
];

// === Unary agreement ===

#[test]
fn unary_ops_agree_across_representations() {
    for op in UnaryOp::iter() {
        for z in VALUES {
            let expected = Complex::from(z).apply_unary(op);

            let mut buffer = ComplexBuffer::from(z);
            buffer.unary_in_place(op);
            assert!(buffer.long_bits_equal(&expected) || (expected.is_nan() && buffer.is_nan()), "{op} {z:?}");

            let mut array = ComplexArray::new(3);
            array.set(1, z.0, z.1).unwrap().unary_in_place(1, op).unwrap();
            let stored = array.get(1).unwrap();
            assert!(stored.long_bits_equal(&expected) || (expected.is_nan() && stored.is_nan()), "{op} {z:?}");
            assert_eq!(array.get(0).unwrap(), Complex::ZERO, "neighbouring slots untouched");
        }
    }
}

#[test]
fn named_unary_methods_match_op_dispatch() {
    let z = (0.4, -0.3);
    let mut array = ComplexArray::new(1);
    array.set(0, z.0, z.1).unwrap().tanh_in_place(0).unwrap();
    assert_eq!(array.get(0).unwrap(), Complex::from(z).tanh());

    let mut buffer = ComplexBuffer::from(z);
    buffer.acosh_in_place();
    assert_eq!(buffer.get(), Complex::from(z).acosh());
}

// === Binary agreement ===

#[test]
fn binary_ops_agree_for_every_operand_shape() {
    let lhs = (1.5, -2.0);
    let rhs = Complex::new(-0.5, 0.75);
    for op in BinaryOp::iter() {
        let expected = Complex::from(lhs).apply_binary(op, rhs);

        let mut buffer = ComplexBuffer::from(lhs);
        buffer.binary_in_place(op, rhs);
        assert_eq!(buffer.get(), expected, "{op} value operand");

        let source = ComplexBuffer::from(rhs);
        let mut buffer = ComplexBuffer::from(lhs);
        buffer.binary_in_place(op, &source);
        assert_eq!(buffer.get(), expected, "{op} buffer operand");

        let other: ComplexArray = [Complex::ZERO, rhs].into_iter().collect();
        let mut array: ComplexArray = [Complex::from(lhs)].into_iter().collect();
        array.binary_in_place(0, op, other.get(1).unwrap()).unwrap();
        assert_eq!(array.get(0).unwrap(), expected, "{op} element of another array");

        let mut buffer = ComplexBuffer::from(lhs);
        buffer.binary_in_place_from_array(op, &other, 1).unwrap();
        assert_eq!(buffer.get(), expected, "{op} indexed element into buffer");

        let mut array: ComplexArray = [Complex::ZERO, Complex::from(lhs)].into_iter().collect();
        array.binary_in_place_from_array(1, op, &other, 1).unwrap();
        assert_eq!(array.get(1).unwrap(), expected, "{op} indexed element of another array");

        let mut array: ComplexArray = [Complex::from(lhs), rhs].into_iter().collect();
        array.binary_in_place_from(0, op, 1).unwrap();
        assert_eq!(array.get(0).unwrap(), expected, "{op} element of the same array");
        assert_eq!(array.get(1).unwrap(), rhs);
    }
}

#[test]
fn real_operands_agree() {
    for op in BinaryOp::iter() {
        let expected = Complex::new(2.0, -0.0).apply_binary(op, 4.0);
        let mut buffer = ComplexBuffer::new(2.0, -0.0);
        buffer.binary_in_place(op, 4.0);
        assert!(buffer.long_bits_equal(&expected), "{op}");
    }
}

#[test]
fn reversed_forms() {
    let mut array = ComplexArray::from_parts(vec![2.0, 4.0], vec![0.0, 4.0]).unwrap();
    array.subtract_reversed_in_place_from(0, 1).unwrap();
    assert_eq!(array.get(0).unwrap(), Complex::new(2.0, 4.0));
    array.divide_reversed_in_place(1, Complex::new(20.0, 10.0)).unwrap();
    assert_eq!(array.get(1).unwrap(), Complex::new(3.75, -1.25));
}

// === Aliasing ===

#[test]
fn pow_from_same_slot_uses_a_snapshot() {
    let z = Complex::new(1.5, 0.5);
    let mut array = ComplexArray::new(2);
    array.assign(0, z).unwrap().pow_in_place_from(0, 0).unwrap();
    assert_eq!(array.get(0).unwrap(), z.pow(z));
}

#[test]
fn every_binary_op_is_alias_safe() {
    let z = Complex::new(-0.75, 1.25);
    for op in BinaryOp::iter() {
        let mut array: ComplexArray = [z].into_iter().collect();
        array.binary_in_place_from(0, op, 0).unwrap();
        assert_eq!(array.get(0).unwrap(), z.apply_binary(op, z), "{op}");
    }
}

#[test]
fn buffer_operand_from_itself_via_snapshot() {
    let mut acc = ComplexBuffer::new(0.5, 0.5);
    let me = acc.get();
    acc.pow_in_place(me);
    assert_eq!(acc.get(), me.pow(me));
}

// === Index faults ===

#[test]
fn out_of_range_indices_fault() {
    let mut array = ComplexArray::new(4);
    assert_eq!(array.real(4), Err(ComplexError::IndexOutOfRange { index: 4, len: 4 }));
    assert_eq!(array.imag(-1), Err(ComplexError::IndexOutOfRange { index: -1, len: 4 }));
    assert_eq!(
        array.exp_in_place(4).map(|_| ()),
        Err(ComplexError::IndexOutOfRange { index: 4, len: 4 })
    );
    assert_eq!(
        array.pow_in_place_from(0, -1).map(|_| ()),
        Err(ComplexError::IndexOutOfRange { index: -1, len: 4 })
    );
    assert_eq!(
        array.swap(0, 9_i64).map(|_| ()),
        Err(ComplexError::IndexOutOfRange { index: 9, len: 4 })
    );
    assert!(ComplexBuffer::from_array(&array, 4_usize).is_err());
    let other = ComplexArray::new(2);
    assert_eq!(
        array.binary_in_place_from_array(0, BinaryOp::Add, &other, 2).map(|_| ()),
        Err(ComplexError::IndexOutOfRange { index: 2, len: 2 })
    );
    let mut buffer = ComplexBuffer::new(1.0, 1.0);
    assert!(buffer.binary_in_place_from_array(BinaryOp::Pow, &other, -1).is_err());
    assert_eq!(buffer.parts(), (1.0, 1.0));
    assert!(array.get(3).is_ok());
}

#[test]
fn negative_size_is_rejected() {
    let err = ComplexArray::try_new(-1).unwrap_err();
    assert!(matches!(err, ComplexError::InvalidArgument(_)));
    assert_eq!(err.to_string(), "invalid argument: array size must be non-negative, got -1");
}

#[test]
fn index_error_message() {
    let array = ComplexArray::new(2);
    let err = array.abs(2).unwrap_err();
    assert_eq!(err.to_string(), "index out of range: 2 not in 0..2");
}

// === Read capabilities ===

#[test]
fn read_accessors_agree() {
    let z = Complex::new(-3.0, 4.0);
    let buffer = ComplexBuffer::from(z);
    let array: ComplexArray = [Complex::ZERO, z].into_iter().collect();
    assert_eq!(array.abs(1).unwrap(), z.abs());
    assert_eq!(buffer.arg(), z.arg());
    assert_eq!(array.arg(1).unwrap(), z.arg());
    assert_eq!(array.canonical_string(1).unwrap(), "-3.0 + 4.0i");
    assert_eq!(buffer.canonical_string(), z.to_string());
    assert_eq!(array.hash_code(1).unwrap(), z.hash_code());
    assert!(array.is_finite(1).unwrap());
    assert!(!array.is_nan(0).unwrap());
    assert!(buffer.equal(&z) && z.equal(&buffer));
}

#[test]
fn iter_and_into_parts() {
    let array = ComplexArray::from_parts(vec![1.0, 2.0], vec![-1.0, -2.0]).unwrap();
    let values: Vec<Complex> = array.iter().collect();
    assert_eq!(values, vec![Complex::new(1.0, -1.0), Complex::new(2.0, -2.0)]);
    assert_eq!(array.into_parts(), (vec![1.0, 2.0], vec![-1.0, -2.0]));
}
