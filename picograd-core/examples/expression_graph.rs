//! # Expression Graph Walkthrough
//!
//! Builds a small labeled expression, runs the backward pass, prints every
//! gradient and emits the graph in Graphviz DOT syntax (pipe the output
//! into `dot -Tsvg` to draw it).
//!
//! Run with:
//! `cargo run --example expression_graph`

use picograd_core::ops::activation::tanh_op;
use picograd_core::utils::to_dot;
use picograd_core::Value;

fn main() {
    let a = Value::new(2.0_f64).with_label("a");
    let b = Value::new(-3.0_f64).with_label("b");
    let c = Value::new(10.0_f64).with_label("c");

    let e = (&a * &b).with_label("e");
    let d = (&e + &c).with_label("d");
    let output = tanh_op(&d).with_label("output");

    println!("forward: output = {:.6}", output.data());

    output.backward();

    for node in [&a, &b, &c, &e, &d, &output] {
        println!(
            "{:>6}: data = {:>10.6}  grad = {:>10.6}",
            node.label().unwrap_or_default(),
            node.data(),
            node.grad()
        );
    }

    println!("\n{}", to_dot(&output));
}
