use buntai_rs::{quote_spans, Analyzer, Chunker, LexiconAnalyzer};

fn main() {
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "だから彼は「明日雨だ」と言った。".to_string());
    println!("Input: {}", input);

    let chunker = Chunker::new(&input);
    let chunks = chunker.make_chunks();

    println!("\nChunks:");
    for (i, chunk) in chunks.iter().enumerate() {
        println!("  {}: {:?} - {:?}", i, chunk.text(&input), chunk.category);
    }

    println!("\nSpans:");
    for span in quote_spans(&input) {
        let kind = if span.is_quoted() { "quoted" } else { "plain" };
        println!("  {}: {:?}", kind, span.text());
    }

    let analyzer = match LexiconAnalyzer::embedded() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match analyzer.analyze(&input) {
        Ok(morphemes) => {
            println!("\nMorphemes:");
            for (i, m) in morphemes.iter().enumerate() {
                println!("  {}: {}\t{}", i, m.surface, m.features());
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
