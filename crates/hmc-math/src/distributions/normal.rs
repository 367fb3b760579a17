//! Normal (Gaussian) distribution helpers.

use hmc_core::Real;
use std::f64::consts::PI;

/// The standard normal probability density function.
///
/// `φ(x) = exp(-x²/2) / √(2π)`
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// The standard normal cumulative distribution function Φ(x).
///
/// Uses the Abramowitz & Stegun 26.2.17 rational approximation; maximum
/// absolute error < 7.5×10⁻⁸.
pub fn normal_cdf(x: Real) -> Real {
    if x == 0.0 {
        return 0.5;
    }
    let sign = if x < 0.0 { -1.0_f64 } else { 1.0_f64 };
    let t = 1.0 / (1.0 + 0.2316419 * x.abs());
    let poly = t
        * (0.319_381_530
            + t * (-0.356_563_782
                + t * (1.781_477_937 + t * (-1.821_255_978 + t * 1.330_274_429))));
    0.5 + sign * (0.5 - poly * normal_pdf(x))
}

/// The inverse standard normal CDF (probit function).
///
/// Peter J. Acklam's rational approximation; maximum absolute error
/// < 1.15×10⁻⁹.
///
/// # Panics
/// Panics if `p` is outside the open interval (0, 1).
pub fn normal_cdf_inverse(p: Real) -> Real {
    assert!(p > 0.0 && p < 1.0, "p must be in (0, 1)");

    const A: [f64; 6] = [
        -3.969_683_028_665_376e+01,
        2.209_460_984_245_205e+02,
        -2.759_285_104_469_687e+02,
        1.383_577_518_672_69e2,
        -3.066_479_806_614_716e+01,
        2.506_628_277_459_239e+00,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e+01,
        1.615_858_368_580_409e+02,
        -1.556_989_798_598_866e+02,
        6.680_131_188_771_972e+01,
        -1.328_068_155_288_572e+01,
    ];
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-03,
        -3.223_964_580_411_365e-01,
        -2.400_758_277_161_838e+00,
        -2.549_732_539_343_734e+00,
        4.374_664_141_464_968e+00,
        2.938_163_982_698_783e+00,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-03,
        3.224_671_290_700_398e-01,
        2.445_134_137_142_996e+00,
        3.754_408_661_907_416e+00,
    ];

    const P_LOW: f64 = 0.02425;
    const P_HIGH: f64 = 1.0 - P_LOW;

    if p < P_LOW {
        // Lower tail
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= P_HIGH {
        // Central region
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        // Upper tail
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn cdf_reference_values() {
        assert_abs_diff_eq!(normal_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(normal_cdf(1.96), 0.975, epsilon = 1e-4);
        assert_abs_diff_eq!(normal_cdf(-1.96), 0.025, epsilon = 1e-4);
    }

    #[test]
    fn cdf_symmetry() {
        for x in [0.1, 0.7, 1.3, 2.5] {
            assert_abs_diff_eq!(normal_cdf(x) + normal_cdf(-x), 1.0, epsilon = 1e-7);
        }
    }

    #[test]
    fn inverse_at_median() {
        assert_abs_diff_eq!(normal_cdf_inverse(0.5), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn inverse_round_trip() {
        for p in [0.001, 0.01, 0.2, 0.5, 0.8, 0.99, 0.999] {
            let x = normal_cdf_inverse(p);
            assert_abs_diff_eq!(normal_cdf(x), p, epsilon = 1e-6);
        }
    }

    #[test]
    fn inverse_is_antisymmetric() {
        for p in [0.01, 0.1, 0.3] {
            assert_abs_diff_eq!(
                normal_cdf_inverse(p),
                -normal_cdf_inverse(1.0 - p),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    #[should_panic]
    fn inverse_rejects_zero() {
        normal_cdf_inverse(0.0);
    }

    proptest! {
        #[test]
        fn inverse_round_trips_across_the_unit_interval(p in 1e-6..0.999_999f64) {
            let x = normal_cdf_inverse(p);
            prop_assert!((normal_cdf(x) - p).abs() < 1e-4);
        }
    }
}
