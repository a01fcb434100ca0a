use tracing_subscriber::EnvFilter;
use tri_list::{Element, TriList};

type Tokens = TriList<i64, String, char>;

/// Splits input into numbers, words and punctuation, keeping their order
fn tokenize(input: &str) -> Tokens {
    let mut tokens = Tokens::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c.is_ascii_digit() {
            let mut number = 0i64;
            while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                number = number * 10 + i64::from(digit);
                chars.next();
            }
            tokens.push_back(number);
        } else if c.is_alphabetic() {
            let mut word = String::new();
            while let Some(&c) = chars.peek().filter(|c| c.is_alphabetic()) {
                word.push(c);
                chars.next();
            }
            tokens.push_back(word);
        } else {
            tokens.push_back(c);
            chars.next();
        }
    }

    tokens
}

fn render(tokens: &Tokens) -> String {
    tokens
        .iter()
        .map(|token| match token {
            Element::First(n) => n.to_string(),
            Element::Second(w) => w,
            Element::Third(p) => p.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    // RUST_LOG=tri_list=trace shows transform registration
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tokens = tokenize("Order 12 apples, 3 pears; ship to dock 7!");
    println!("Tokens:     {}", render(&tokens));

    println!(
        "Counts:     {} numbers, {} words, {} punctuation",
        tokens.count::<i64, _>(),
        tokens.count::<String, _>(),
        tokens.count::<char, _>()
    );

    // Normalize words and scale quantities without touching storage
    tokens.modify_only(|w: String| w.to_lowercase());
    tokens.modify_only(|n: i64| n * 12);
    tokens.modify_only(|n: i64| n + 1);
    println!("Normalized: {}", render(&tokens));

    let words: Vec<String> = tokens.range_over::<String, _>().collect();
    println!("Words:      {:?}", words);

    tokens.reset::<i64, _>();
    let quantities: Vec<i64> = tokens.range_over::<i64, _>().collect();
    println!("Raw counts: {:?}", quantities);
}
