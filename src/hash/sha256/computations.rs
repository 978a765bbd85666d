//! SHA-256 round functions and the compression loop.

use super::K256;
use super::schedule::SCHEDULE_LEN;

#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// Bitwise choose: takes bits of `f` where `e` is set, bits of `g` elsewhere.
#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ ((!e) & g)
}

/// Bitwise majority of three words.
#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Runs the 64 compression rounds over one expanded schedule.
///
/// The working registers start from `state`, which is left untouched. The
/// returned registers `[a, b, c, d, e, f, g, h]` still have to be folded
/// into the hash state with
/// [`accumulate`](crate::hash::sha256::core::accumulate).
pub fn compress(state: &[u32; 8], w: &[u32; SCHEDULE_LEN]) -> [u32; 8] {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (&ki, &wi) in K256.iter().zip(w.iter()) {
        let bs1 = big_sigma1(e);
        let ch = ch(e, f, g);

        let bs0 = big_sigma0(a);
        let maj = maj(a, b, c);

        let t1 = h
            .wrapping_add(bs1)
            .wrapping_add(ch)
            .wrapping_add(ki)
            .wrapping_add(wi);

        let t2 = bs0.wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    [a, b, c, d, e, f, g, h]
}
