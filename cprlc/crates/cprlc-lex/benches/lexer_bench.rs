//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package cprlc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use cprlc_lex::{Cursor, Lexer, Source};
use cprlc_util::Handler;

fn lexer_token_count(source: &str) -> usize {
    let handler = Handler::new();
    match Lexer::new(Cursor::new(source), &handler) {
        Ok(lexer) => lexer.count(),
        Err(_) => 0,
    }
}

fn streaming_token_count(source: &str) -> usize {
    let handler = Handler::new();
    let lexer = Source::new(source.as_bytes())
        .map_err(cprlc_lex::Error::from)
        .and_then(|input| Lexer::new(input, &handler));
    match lexer {
        Ok(lexer) => lexer.count(),
        Err(_) => 0,
    }
}

const PROGRAM: &str = r#"
declare
   const size : Integer := 100;
   type IntArray = array[size] of Integer;
   var a : IntArray;
   var i, j, t : Integer;

   procedure sort(var a : IntArray) is
      var swapped : Boolean;
   begin
      loop
         swapped := false;
         i := 0;
         while i < size - 1 loop
            if a[i] > a[i + 1] then
               t := a[i];  a[i] := a[i + 1];  a[i + 1] := t;   // swap
               swapped := true;
            end if;
            i := i + 1;
         end loop;
         exit when not swapped;
      end loop;
   end sort;
begin
   read a[0];
   sort(a);
   writeln "sorted: ", a[0], '\n';
end.
"#;

fn bench_lexer_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "var x : Integer := 42; x := x * 2 + 1;";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("declaration", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_program");

    let source = PROGRAM.repeat(50);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("cursor", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.bench_function("streaming", |b| {
        b.iter(|| streaming_token_count(black_box(&source)))
    });

    group.finish();
}

fn bench_lexer_comments(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_comments");

    let source = "// a line of commentary that the lexer must skip\n".repeat(1000) + "end";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("comment_lines", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_simple,
    bench_lexer_program,
    bench_lexer_comments
);
criterion_main!(benches);
