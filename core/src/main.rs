use clap::{Parser, Subcommand};
use todo_core::{CreateTodo, TodoItem, TodoService, DEFAULT_BASE_URL};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "todo", about = "Command-line client for the todo API")]
struct Cli {
    /// Root URL of the todo server.
    #[arg(long, env = "TODO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every item.
    List,
    /// Print one item.
    Get { id: i64 },
    /// Create an item.
    Add {
        text: String,
        #[arg(long)]
        done: bool,
    },
    /// Replace an item's text and completion flag.
    Update {
        id: i64,
        text: String,
        #[arg(long)]
        done: bool,
    },
    /// Remove an item.
    Delete { id: i64 },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let service = TodoService::new(&cli.base_url);

    match cli.command {
        Command::List => {
            for item in service.list_todos()? {
                println!("{item}");
            }
        }
        Command::Get { id } => println!("{}", service.get_todo(id)?),
        Command::Add { text, done } => {
            let created = service.add_todo(&CreateTodo {
                text,
                is_complete: done,
            })?;
            println!("{}", created.item);
        }
        Command::Update { id, text, done } => {
            service.update_todo(&TodoItem {
                id,
                text,
                is_complete: done,
            })?;
        }
        Command::Delete { id } => service.delete_todo(id)?,
    }
    Ok(())
}
