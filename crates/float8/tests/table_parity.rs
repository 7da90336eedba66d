use float8::{ArithmeticMode, Float8, Float8Error};

// Everything lives in one test function: the lookup tables are process
// state, and parallel test functions in this binary would race on
// enable/disable.
#[test]
fn tables_are_observationally_identical_to_the_algorithmic_path() {
    float8::disable_fast_arithmetic();
    float8::disable_fast_conversion();
    assert_eq!(float8::table_memory_usage(), 0);

    // Capture the algorithmic results for every input while no table
    // can interfere.
    let decoded: Vec<f32> = (0..=u8::MAX)
        .map(|bits| Float8::from_bits(bits).to_f32())
        .collect();
    let mut algorithmic = vec![[0u8; 4]; 1 << 16];
    for a_bits in 0..=u8::MAX {
        for b_bits in 0..=u8::MAX {
            let a = Float8::from_bits(a_bits);
            let b = Float8::from_bits(b_bits);
            let mode = ArithmeticMode::Algorithmic;
            algorithmic[usize::from(a_bits) << 8 | usize::from(b_bits)] = [
                a.add_with_mode(b, mode).unwrap().to_bits(),
                a.sub_with_mode(b, mode).unwrap().to_bits(),
                a.mul_with_mode(b, mode).unwrap().to_bits(),
                a.div_with_mode(b, mode).unwrap().to_bits(),
            ];
        }
    }

    // An explicit lookup request with no tables fails loudly.
    assert!(matches!(
        Float8::ONE.add_with_mode(Float8::ONE, ArithmeticMode::Lookup),
        Err(Float8Error::TablesDisabled { op: "add" })
    ));
    assert!(matches!(
        Float8::ONE.div_with_mode(Float8::ONE, ArithmeticMode::Lookup),
        Err(Float8Error::TablesDisabled { op: "div" })
    ));

    float8::enable_fast_conversion();
    float8::enable_fast_arithmetic();
    // Enabling again is a no-op.
    float8::enable_fast_arithmetic();
    assert_eq!(
        float8::table_memory_usage(),
        256 * 4 + 4 * (1 << 16),
        "decode table plus four operator tables"
    );

    for bits in 0..=u8::MAX {
        let via_table = Float8::from_bits(bits).to_f32();
        assert_eq!(
            via_table.to_bits(),
            decoded[bits as usize].to_bits(),
            "decode 0x{bits:02x}"
        );
    }

    for a_bits in 0..=u8::MAX {
        for b_bits in 0..=u8::MAX {
            let a = Float8::from_bits(a_bits);
            let b = Float8::from_bits(b_bits);
            let expected = algorithmic[usize::from(a_bits) << 8 | usize::from(b_bits)];
            let mode = ArithmeticMode::Lookup;
            let got = [
                a.add_with_mode(b, mode).unwrap().to_bits(),
                a.sub_with_mode(b, mode).unwrap().to_bits(),
                a.mul_with_mode(b, mode).unwrap().to_bits(),
                a.div_with_mode(b, mode).unwrap().to_bits(),
            ];
            assert_eq!(got, expected, "pair 0x{a_bits:02x} 0x{b_bits:02x}");
        }
    }

    // Auto mode keeps working after the tables are dropped.
    float8::disable_fast_arithmetic();
    float8::disable_fast_conversion();
    let sum = Float8::ONE
        .add_with_mode(Float8::ONE, ArithmeticMode::Auto)
        .unwrap();
    assert_eq!(sum.to_f32(), 2.0);
    assert_eq!(float8::table_memory_usage(), 0);
}
