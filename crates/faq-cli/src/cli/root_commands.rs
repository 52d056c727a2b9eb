use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Search and filter the FAQ list.
    List(ListArgs),
    /// Tag histogram, most used first.
    Categories,
    /// Most helpful entries.
    Popular(PopularArgs),
    /// Show one entry.
    Show(ShowArgs),
    /// Mark an entry as helpful.
    Like(VoteArgs),
    /// Mark an entry as not helpful.
    Dislike(VoteArgs),
    /// Submit a question for the team to answer.
    Ask(AskArgs),
    /// Print the JSON schema of a data type.
    Schema(SchemaArgs),
    /// Print the effective configuration.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Free-text search over question, answer, and tags.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only entries carrying this exact tag.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort field: created-at, likes, dislikes, helpful-count, helpful-ratio, question.
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending (default when --sort is given).
    #[arg(long, conflicts_with = "asc")]
    pub desc: bool,

    /// Sort ascending.
    #[arg(long)]
    pub asc: bool,

    /// Entry id to show expanded.
    #[arg(long)]
    pub open: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PopularArgs {
    /// Number of entries (overrides --limit and search.popular_limit).
    #[arg(long)]
    pub top: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct VoteArgs {
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    /// Question text. Read from stdin when omitted.
    pub question: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// One of: faq, vote-counts, new-question, vote-summary, faq-list.
    pub type_name: String,
}
