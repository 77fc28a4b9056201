use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a filter into a WHERE fragment and its bound arguments
    Compile {
        #[arg(long, env = "FILTERC_RESOURCE", help = "Resource type the filter applies to")]
        resource: String,

        #[arg(long, help = "Pretty-print the JSON output")]
        pretty: bool,

        filter: String,
    },
    /// Parse and validate a filter without generating SQL
    Check {
        #[arg(long, env = "FILTERC_RESOURCE", help = "Resource type the filter applies to")]
        resource: String,

        filter: String,
    },
    /// List the filterable attributes of a resource type
    Attributes {
        #[arg(long, env = "FILTERC_RESOURCE", help = "Resource type to describe")]
        resource: Option<String>,

        #[arg(long, help = "Print the attributes as JSON instead of a table")]
        json: bool,
    },
    /// Dump the lexer's token stream for a filter
    Tokens { filter: String },
}
