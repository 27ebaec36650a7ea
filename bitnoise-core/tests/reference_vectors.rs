use bitnoise_core::{noise_1d, noise_2d, noise_3d, noise_4d, squirrel_noise5};

#[test]
fn scalar_hash_matches_golden_values() {
    assert_eq!(squirrel_noise5(0, 0), 0x1679_1E00);
    assert_eq!(squirrel_noise5(1, 0), 0xC895_CB1D);
    assert_eq!(squirrel_noise5(-1, 0), 0xFAF1_6D54);
    assert_eq!(squirrel_noise5(0, 1), 0x23F6_C851);
    assert_eq!(squirrel_noise5(42, 1337), 0x968D_E4C9);
    assert_eq!(squirrel_noise5(123_456_789, -987_654_321), 0x7AC3_ED66);
}

#[test]
fn scalar_hash_handles_extreme_inputs() {
    assert_eq!(squirrel_noise5(i32::MIN, 0), 0x679C_CD13);
    assert_eq!(squirrel_noise5(i32::MAX, i32::MIN), 0xFAF1_6D54);
}

#[test]
fn folded_noise_matches_golden_values() {
    assert_eq!(noise_1d(5, 99), 0x1C42_9BB8);

    assert_eq!(noise_2d(1, 1, 0), 0x3DA6_E823);
    assert_eq!(noise_2d(-7, 13, 21), 0x0D0A_2A2C);
    assert_eq!(noise_2d(i32::MAX, i32::MAX, 0), 0x503F_52DE);

    assert_eq!(noise_3d(4, -5, 6, 7), 0xAEF3_873E);
    assert_eq!(noise_3d(-1, -1, -1, -1), 0xEE2B_971C);

    assert_eq!(noise_4d(10, 20, 30, 40, 50), 0x38E5_F1D3);
    assert_eq!(noise_4d(-3, 1, 4, -1, 5), 0x41A7_1A55);
}

#[test]
fn zero_coordinates_collapse_to_scalar_hash() {
    for seed in [0, 1, -42, i32::MAX, i32::MIN] {
        let scalar = squirrel_noise5(0, seed);
        assert_eq!(noise_1d(0, seed), scalar);
        assert_eq!(noise_2d(0, 0, seed), scalar);
        assert_eq!(noise_3d(0, 0, 0, seed), scalar);
        assert_eq!(noise_4d(0, 0, 0, 0, seed), scalar);
    }
}

#[test]
fn higher_arity_with_zeroed_axes_collapses_to_lower_arity() {
    for x in [-3, 0, 7, 1_000_000] {
        assert_eq!(noise_2d(x, 0, 11), noise_1d(x, 11));
        assert_eq!(noise_3d(x, 0, 0, 11), noise_1d(x, 11));
        assert_eq!(noise_4d(x, 0, 0, 0, 11), noise_1d(x, 11));
    }
}
