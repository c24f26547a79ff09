//! Pi via the Chudnovsky series, evaluated by binary splitting with a per-radix
//! cache of partial sums so raising the target precision only computes the new
//! tail of the series (spec component 4.8).

use dashu_int::IBig;
use florix_num::{Float, Precision};

use crate::cache::with_cache;
use crate::invroot::inverse_root;
use crate::precision::extend;
use crate::Result;

const A: i64 = 13591409;
const B: i64 = 545140134;
/// `640320^3 / 24`.
const J: i64 = 10939058860032000;

/// The binary-splitting state retained between two `pi` calls at the same
/// radix, so a higher-precision request only evaluates the series tail.
#[derive(Clone)]
pub struct Splitting {
    terms_computed: usize,
    t: IBig,
    q: IBig,
    p: IBig,
    inv_root_640320: Float,
    inv_root_precision: usize,
}

/// `(P_n, Q_n, T_n)` for the single term at index `n`.
fn term(n: u64) -> (IBig, IBig, IBig) {
    let (p, q) = if n == 0 {
        (IBig::ONE, IBig::ONE)
    } else {
        let n = n as i64;
        let p = IBig::from((6 * n - 5) * (2 * n - 1) * (6 * n - 1));
        let q = IBig::from(n).pow(3) * IBig::from(J);
        (p, q)
    };
    let a_n = IBig::from(A + B * (n as i64));
    let mut t = &p * &a_n;
    if n % 2 == 1 {
        t = -t;
    }
    (p, q, t)
}

/// Combines two adjacent splits `[n1, mid)` and `[mid, n2)` into `[n1, n2)`.
fn combine((p_left, q_left, t_left): (IBig, IBig, IBig), (p_right, q_right, t_right): (IBig, IBig, IBig)) -> (IBig, IBig, IBig) {
    let t = &q_right * &t_left + &p_left * &t_right;
    let q = &q_left * &q_right;
    let p = &p_left * &p_right;
    (p, q, t)
}

/// `(P, Q, T)` for the half-open term range `[n1, n2)`, per the standard
/// Chudnovsky binary-splitting recurrence: `T = Q_right*T_left + P_left*T_right`.
/// Lengths 1-4 are unrolled directly rather than recursing down to single
/// terms, cutting constant factors at the typical leaf sizes this hits.
fn binary_split(n1: u64, n2: u64) -> (IBig, IBig, IBig) {
    match n2 - n1 {
        1 => term(n1),
        2 => combine(term(n1), term(n1 + 1)),
        3 => combine(combine(term(n1), term(n1 + 1)), term(n1 + 2)),
        4 => combine(combine(term(n1), term(n1 + 1)), combine(term(n1 + 2), term(n1 + 3))),
        _ => {
            let mid = n1 + (n2 - n1) / 2;
            combine(binary_split(n1, mid), binary_split(mid, n2))
        }
    }
}

/// Number of Chudnovsky terms needed for `precision` digits of `radix`:
/// each term contributes about `log(151931373056000) / ln(radix)` digits
/// (`14.1816...` decimal digits per term), generalized to an arbitrary radix
/// via natural logs.
fn terms_needed(precision: usize, radix: u32) -> usize {
    const DECIMAL_DIGITS_PER_TERM: f64 = 14.181647462725477;
    let digits_per_term = DECIMAL_DIGITS_PER_TERM * 10f64.ln() / (radix as f64).ln();
    (precision as f64 / digits_per_term).ceil().max(1.0) as usize
}

/// `pi` to `precision` digits of `radix`, reusing the per-radix cache so a
/// second call at a higher precision only computes the new series tail.
pub fn pi(precision: usize, radix: u32) -> Result<Float> {
    if precision == 0 {
        return Err(crate::error::KernelError::from(
            crate::error::OperationError::InvalidPrecision,
        ));
    }

    let working_precision = extend(precision);
    let terms_new = terms_needed(working_precision, radix).max(1);

    with_cache(radix, |cache| -> Result<Float> {
        let splitting = cache.splitting.take();

        let (p, q, t, inv_root_640320, inv_root_precision) = match splitting {
            Some(prev) if prev.terms_computed >= terms_new => {
                (prev.p, prev.q, prev.t, prev.inv_root_640320, prev.inv_root_precision)
            }
            Some(prev) => {
                let (p_tail, q_tail, t_tail) = binary_split(prev.terms_computed as u64, terms_new as u64);
                let t = &q_tail * &prev.t + &prev.p * &t_tail;
                let q = &prev.q * &q_tail;
                let p = &prev.p * &p_tail;

                let inv_root_640320 = inverse_root(
                    &Float::from_i64(640320, radix),
                    2,
                    working_precision,
                    Some(&prev.inv_root_640320),
                    Some(prev.inv_root_precision),
                )?;
                (p, q, t, inv_root_640320, working_precision)
            }
            None => {
                let (p, q, t) = binary_split(0, terms_new as u64);
                let inv_root_640320 =
                    inverse_root(&Float::from_i64(640320, radix), 2, working_precision, None, None)?;
                (p, q, t, inv_root_640320, working_precision)
            }
        };

        let t_float = Float::from_mantissa_scale(t.clone(), 0, radix);
        let q_float = Float::from_mantissa_scale(q.clone(), 0, radix);
        let inv_t = inverse_root(&t_float, 1, working_precision, None, None)?;

        let constant = Float::from_i64(53360, radix);
        let value = &(&inv_root_640320 * &inv_t) * &(&constant * &q_float);
        let pi_value = value.with_precision(Precision::Finite(precision));

        let cache_precision = cache.pi.as_ref().map(|p| p.precision()).unwrap_or(Precision::Finite(0));
        if Precision::Finite(precision) >= cache_precision {
            cache.pi = Some(pi_value.clone());
        }
        cache.splitting = Some(Splitting {
            terms_computed: terms_new,
            t,
            q,
            p,
            inv_root_640320,
            inv_root_precision,
        });

        Ok(pi_value)
    })
}
