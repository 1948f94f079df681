//! Display functions for command results

use super::formatters::{create_progress_bar, score_to_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        let marker = if step.consistent {
            ""
        } else {
            " (probe, cannot be the secret)"
        };
        println!(
            "\nTurn {}: {} {} {}{}",
            turn,
            step.guess.to_string().bright_white().bold(),
            score_to_pegs(step.score),
            step.score,
            marker.bright_black()
        );

        if verbose {
            println!("  Tactic:     {}", step.tier);
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Time:       {:.2}s", step.duration.as_secs_f64());
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} turns!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved in {} turns", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of probe analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PROBE ANALYSIS:".bright_cyan().bold(),
        result.probe.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} candidates:", result.total_candidates);
    for (score, &count) in result.histogram.iter().enumerate() {
        let bar = create_progress_bar(count as f64, result.total_candidates as f64, 30);
        println!("   Score {score}: [{}] {count}", bar.green());
    }

    println!(
        "\n   Worst case:  {}",
        format!("{} candidates remain", result.worst_case).bright_yellow()
    );
    println!(
        "   Consistent:  {}",
        if result.consistent {
            "yes, could be the secret".green()
        } else {
            "no, information only".yellow()
        }
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Secrets tested:   {}", result.total_games);
    println!(
        "   Average turns:    {}",
        format!("{:.2}", result.average_turns).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_turns).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_turns).yellow()
    );
    if let Some((secret, turns)) = result.hardest {
        println!("   Hardest secret:   {secret} ({turns} turns)");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.2}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&turns, &count) in &result.distribution {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {turns:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
