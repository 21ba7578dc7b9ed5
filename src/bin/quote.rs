use std::io::{self, Read};

fn main() {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content).expect("read stdin");
    let quoted = chatmark::wrap_with_backtick_fence(&content, Some("quote"));
    print!("{quoted}");
}
