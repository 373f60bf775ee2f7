// demos/basic_usage.rs
use binary_codeword::Codeword;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut a = Codeword::new(8)?;
    let mut b = Codeword::new(8)?;

    a.set_bit(0, 1)?;
    a.set_bit(3, 1)?;

    b.set_bit(3, 1)?;
    b.set_bit(4, 1)?;

    let c = a.xor(&b)?; // XOR into a new codeword
    a.xor_in_place(&b)?; // in-place XOR, no allocation

    print!("c bits: ");
    for i in 0..c.length() {
        print!("{}", c.get_bit(i)?);
    }
    println!();

    println!("c = {}", c);
    println!("a == c? {}", a.equals(&c)?);

    Ok(())
}
