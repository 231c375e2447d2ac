use clap::Parser;
use dotenv::dotenv;
use reqwest::Client;
use vacancy_stats::{headhunter, superjob, table};

const DEFAULT_LANGUAGES: [&str; 14] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "C",
    "Go",
    "Shell",
    "Objective-C",
    "Scala",
    "Swift",
    "TypeScript",
];

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Programming languages to collect statistics for (defaults to the
    /// built-in list)
    #[clap(long)]
    language: Vec<String>,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    let user_agent = std::env::var("USER_AGENT").expect("USER_AGENT not set");
    let superjob_key = std::env::var("SUPERJOB_KEY").expect("SUPERJOB_KEY not set");
    let languages = if args.language.is_empty() {
        DEFAULT_LANGUAGES.into_iter().map(String::from).collect()
    } else {
        args.language
    };

    let client = Client::new();
    let headhunter_stats = headhunter::scrape(&client, &user_agent, &languages)
        .await
        .expect("Failed to collect HeadHunter statistics");
    let superjob_stats = superjob::scrape(&client, &superjob_key, &languages)
        .await
        .expect("Failed to collect SuperJob statistics");

    println!("{}", table::render("HeadHunter Moscow", &headhunter_stats));
    println!("{}", table::render("SuperJob Moscow", &superjob_stats));
}
