//! Walks the public matrix API end to end and prints each result.
use anyhow::Result;

use densemat::io::{decode_text, encode_binary, encode_text, read_binary};
use densemat::Matrix;

fn main() -> Result<()> {
    env_logger::init();

    let matrix = Matrix::from_rows(vec![
        vec![2.0, 5.0, 7.0],
        vec![6.0, 3.0, 4.0],
        vec![5.0, -2.0, -3.0],
    ])?;

    println!("Source matrix (3x3):\n{}", matrix);

    separator();

    println!("Transposed:\n{}", matrix.transpose());

    separator();

    let det = matrix.determinant()?;
    println!("Determinant: {}\n", det);

    let inverse = matrix.inverse()?;
    println!("Inverse:\n{}\n", inverse);

    println!(
        "Product with the inverse (should be the identity):\n{}\n",
        matrix.matmul(&inverse)?
    );

    separator();

    println!("Scaled by 2:\n{}\n", matrix.scale(2.0));

    separator();

    let mut resized = matrix.clone();
    resized.resize_rows(2)?;
    resized.resize_cols(2)?;
    println!("After resize_rows(2) and resize_cols(2):\n{}\n", resized);

    separator();

    println!("Minor (2,2):\n{}", matrix.minor(2, 2));

    separator();

    let text = encode_text(&matrix);
    println!("Saved as text:\n{}", text);

    let from_text = decode_text(&text)?;
    println!("Loaded from text:\n{}", from_text);

    separator();

    let bytes = encode_binary(&matrix);
    println!("Saved as binary ({} bytes):", bytes.len());
    println!("{:?}\n", bytes);

    let from_binary = read_binary(bytes.as_slice())?;
    println!("Loaded from binary:\n{}", from_binary);

    Ok(())
}

fn separator() {
    println!("\n========================\n");
}
