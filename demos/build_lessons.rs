//! Builds the bundled lesson fixtures and prints a short overview
//!
//! Usage: `cargo run --example build_lessons -- [search term]`
//! Set `RUST_LOG=lesson=debug` to see per-lesson assembly logs.

use lesson::{
    AssemblerConfig, LessonAssembler, LessonCatalog, LessonResult,
    source::directory::DirectoryDocumentSource,
};

const ORDER: [&str; 5] = [
    "1-what-is-nextjs.md",
    "3-creating-pages.md",
    "4-linking-between-pages.md",
    "3.1-nextjs-intro-motivation.md",
    "3.2-nextjs-features-benefits.md",
];

fn main() -> LessonResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let source = DirectoryDocumentSource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/lessons"));
    let assembler = LessonAssembler::new(AssemblerConfig::reproducible())?;
    let catalog = LessonCatalog::build(&source, &ORDER, &assembler)?;

    println!("=== {} lessons ===\n", catalog.len());
    for lesson in catalog.lessons() {
        println!("{} ({})", lesson.title, lesson.path);
        println!("  keywords: {}", lesson.keywords.join(", "));
        println!("  quiz:     {}", lesson.quiz.question);
        println!("  tasks:    {}", lesson.exercise.mini_tasks.len());
        println!("  activity: {}", lesson.interactive_example.description);
    }

    if let Some(term) = std::env::args().nth(1) {
        let hits = catalog.search(&term);
        println!("\n=== {} matches for {term:?} ===", hits.len());
        for lesson in hits {
            println!("- {}", lesson.id);
        }
    }

    Ok(())
}
