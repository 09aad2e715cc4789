//! Lexer Benchmarks
//!
//! Measures dispatcher and sub-scanner throughput.
//! Run with: `cargo bench --package swiftlex-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use swiftlex_lex::{Lexer, SwiftRules};
use swiftlex_util::Handler;

fn lexer_token_count(source: &str) -> usize {
    let handler = Handler::new();
    let lexer = Lexer::new(source, SwiftRules::builtin(), &handler);
    lexer.count()
}

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "let x = 42\nfunc main() { let y = x + 1; return y }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_let", |b| {
        b.iter(|| lexer_token_count(black_box("let x = 42")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        import Foundation

        /// A point in the plane.
        struct Point: Equatable {
            var x: Double
            var y: Double

            func distance(to other: Point) -> Double {
                let dx = other.x - x, dy = other.y - y
                return (dx * dx + dy * dy).squareRoot()
            }
        }

        enum Shape {
            case circle(center: Point, radius: Double)
            case polygon([Point])
        }

        #if DEBUG
        let shapes: [Shape] = []
        let areas = shapes.map { $0 }.filter { _ in true }
        #endif

        let banner = """
            Shapes: \(shapes.count)
            """
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("let s = (\"hello\")")))
    });

    group.bench_function("escaped_string", |b| {
        let source = r#"print("tab\tquote\" unicode\u{1F600} and more text")"#;
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("multiline_string", |b| {
        let source = "let s = \"\"\"\nline one\nline two\nline three\n\"\"\"";
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_comments(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_comments");

    let source = "// line\n".repeat(50) + &"/* block\n * body\n **/\n".repeat(50);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("mixed_comments", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_keywords,
    bench_lexer_complex,
    bench_lexer_strings,
    bench_lexer_comments
);
criterion_main!(benches);
