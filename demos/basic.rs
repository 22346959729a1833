use real_airy::*;

fn main() {
    // -- All four values at once --
    println!("=== airy(x) (f64) ===");
    println!(
        "{:>8} {:>24} {:>24} {:>24} {:>24}",
        "x", "Ai", "Ai'", "Bi", "Bi'"
    );
    for &x in &[-10.0, -2.09, -1.0, 0.0, 1.0, 2.09, 5.0, 8.5, 25.77] {
        let v = airy(x).values;
        println!(
            "{x:>8} {:>24.16e} {:>24.16e} {:>24.16e} {:>24.16e}",
            v.ai, v.ai_prime, v.bi, v.bi_prime
        );
    }

    // -- Single-value convenience functions --
    println!("\n=== Single-value functions ===");
    let x = -4.5;
    println!("Ai({x})  = {}", ai(x));
    println!("Ai'({x}) = {}", ai_prime(x));
    println!("Bi({x})  = {}", bi(x));
    println!("Bi'({x}) = {}", bi_prime(x));

    // -- Wronskian check --
    println!("\n=== Wronskian Ai·Bi' − Ai'·Bi (should be 1/π) ===");
    for &x in &[-20.0, 0.5, 7.0] {
        let w = airy(x).values.wronskian();
        println!("W({x}) = {w}  (1/π = {})", core::f64::consts::FRAC_1_PI);
    }

    // -- Overflow: saturate and flag --
    println!("\n=== Overflow ===");
    let r = airy(30.0_f64);
    println!("status: {:?} (code {})", r.status, r.status.code());
    println!("values: {:?}", r.values);
    match try_airy(30.0_f64) {
        Ok(v) => println!("unexpected: {v:?}"),
        Err(e) => println!("try_airy(30): {e}"),
    }
    match try_airy(f64::NAN) {
        Ok(v) => println!("unexpected: {v:?}"),
        Err(e) => println!("try_airy(NaN): {e}"),
    }

    // -- f32 support --
    println!("\n=== f32 support ===");
    let r32 = airy(1.5_f32);
    println!("Ai(1.5) = {} (f32)", r32.values.ai);
    println!("Bi(1.5) = {} (f32)", r32.values.bi);
}
