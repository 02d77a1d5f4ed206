//! In-place radix-2 discrete Fourier transform.
//!
//! The transform operates on split real/imaginary buffers whose length must be
//! a power of two. The autocorrelation pipeline only ever transforms buffers
//! sized by [`Workspace`][crate::detector::workspace::Workspace], which always
//! allocates a power-of-two length, so the restriction never reaches callers.

use crate::float::Float;

/// Compute the forward (`inverse = false`) or inverse (`inverse = true`)
/// complex DFT of the signal stored in `re`/`im`, in place.
///
/// Iterative Cooley–Tukey: a bit-reversal permutation of both buffers followed
/// by butterfly passes for stage lengths 2, 4, ..., M. The inverse transform
/// scales every output sample by 1/M, so a forward/inverse round trip
/// reproduces the input.
///
/// Both slices must have the same power-of-two length. Violating that is a
/// programmer error, not a runtime condition.
pub fn transform<T: Float>(re: &mut [T], im: &mut [T], inverse: bool) {
    assert_eq!(re.len(), im.len());
    let n = re.len();
    assert!(n.is_power_of_two(), "transform length must be a power of two");

    // Bit-reversal permutation.
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            re.swap(i, j);
            im.swap(i, j);
        }
    }

    let two_pi = T::from_f64(2.0 * std::f64::consts::PI).unwrap();

    let mut len = 2;
    while len <= n {
        let half = len >> 1;
        let angle = two_pi / T::from_usize(len).unwrap();
        let angle = if inverse { angle } else { -angle };
        let (w_len_im, w_len_re) = angle.sin_cos();

        for base in (0..n).step_by(len) {
            let mut w_re = T::one();
            let mut w_im = T::zero();

            for offset in 0..half {
                let i = base + offset;
                let k = i + half;

                let u_re = re[i];
                let u_im = im[i];
                let v_re = re[k] * w_re - im[k] * w_im;
                let v_im = re[k] * w_im + im[k] * w_re;

                re[i] = u_re + v_re;
                im[i] = u_im + v_im;
                re[k] = u_re - v_re;
                im[k] = u_im - v_im;

                let next_w_re = w_re * w_len_re - w_im * w_len_im;
                w_im = w_re * w_len_im + w_im * w_len_re;
                w_re = next_w_re;
            }
        }

        len <<= 1;
    }

    if inverse {
        let scale = T::one() / T::from_usize(n).unwrap();
        for (r, i) in re.iter_mut().zip(im.iter_mut()) {
            *r = *r * scale;
            *i = *i * scale;
        }
    }
}
