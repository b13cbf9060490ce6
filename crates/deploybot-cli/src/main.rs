//! DeployBot CLI tool.

use clap::{Args, Parser, Subcommand};
use deploybot_client::{PageRequest, ResourceId};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "deploybot")]
#[command(about = "DeployBot API CLI", long_about = None)]
struct Cli {
    /// Account subdomain (the `acme` in acme.deploybot.com); ignored with --account
    #[arg(long, env = "DEPLOYBOT_SUBDOMAIN", global = true)]
    subdomain: Option<String>,

    /// API token
    #[arg(long, env = "DEPLOYBOT_API_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// Account profile file, used when subdomain and token are not both given
    #[arg(long, env = "DEPLOYBOT_CONFIG", default_value = "deploybot.kdl", global = true)]
    config: String,

    /// Profile to use from the profile file; takes precedence over --subdomain/--token
    #[arg(long, global = true)]
    account: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account users
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Deployments
    Deployments {
        #[command(subcommand)]
        command: DeploymentCommands,
    },
    /// Repositories
    Repositories {
        #[command(subcommand)]
        command: RepositoryCommands,
    },
    /// Environments
    Environments {
        #[command(subcommand)]
        command: EnvironmentCommands,
    },
    /// Servers
    Servers {
        #[command(subcommand)]
        command: ServerCommands,
    },
}

#[derive(Args)]
struct PageArgs {
    /// Maximum number of entries to return
    #[arg(long, default_value = "50")]
    limit: u32,
    /// Cursor from a previous page
    #[arg(long)]
    after: Option<String>,
}

impl From<PageArgs> for PageRequest {
    fn from(args: PageArgs) -> Self {
        PageRequest {
            limit: args.limit,
            after: args.after,
        }
    }
}

#[derive(Subcommand)]
enum UserCommands {
    /// List users
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show a user
    Show {
        /// User ID
        id: ResourceId,
    },
}

#[derive(Subcommand)]
enum DeploymentCommands {
    /// List deployments of a repository to an environment
    List {
        /// Repository ID
        #[arg(long)]
        repository: ResourceId,
        /// Environment ID
        #[arg(long)]
        environment: ResourceId,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show a deployment
    Show {
        /// Deployment ID
        id: ResourceId,
    },
    /// Trigger a deployment
    Trigger {
        /// Environment ID
        environment: ResourceId,
        /// Deploy as this user instead of the account owner
        #[arg(long)]
        user: Option<ResourceId>,
        /// Commit to deploy
        #[arg(long)]
        revision: Option<String>,
        /// Upload all files instead of only changed ones
        #[arg(long)]
        from_scratch: bool,
        /// Do not send deployment notifications
        #[arg(long)]
        no_notifications: bool,
        /// Deployment comment
        #[arg(long)]
        comment: Option<String>,
    },
}

#[derive(Subcommand)]
enum RepositoryCommands {
    /// List repositories
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show a repository
    Show {
        /// Repository ID
        id: ResourceId,
    },
}

#[derive(Subcommand)]
enum EnvironmentCommands {
    /// List environments
    List {
        /// Only environments of this repository
        #[arg(long)]
        repository: Option<ResourceId>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show an environment
    Show {
        /// Environment ID
        id: ResourceId,
    },
}

#[derive(Subcommand)]
enum ServerCommands {
    /// List servers
    List {
        /// Only servers of this repository
        #[arg(long)]
        repository: Option<ResourceId>,
        /// Only servers of this environment
        #[arg(long)]
        environment: Option<ResourceId>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show a server
    Show {
        /// Server ID
        id: ResourceId,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays plain JSON
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let client = commands::connect(
        cli.subdomain.as_deref(),
        cli.token.as_deref(),
        &cli.config,
        cli.account.as_deref(),
    )?;

    match cli.command {
        Commands::Users { command } => match command {
            UserCommands::List { page } => {
                commands::users::list(&client, page.into()).await?;
            }
            UserCommands::Show { id } => {
                commands::users::show(&client, id).await?;
            }
        },
        Commands::Deployments { command } => match command {
            DeploymentCommands::List {
                repository,
                environment,
                page,
            } => {
                commands::deployments::list(&client, repository, environment, page.into()).await?;
            }
            DeploymentCommands::Show { id } => {
                commands::deployments::show(&client, id).await?;
            }
            DeploymentCommands::Trigger {
                environment,
                user,
                revision,
                from_scratch,
                no_notifications,
                comment,
            } => {
                let options = commands::deployments::trigger_options(
                    user,
                    revision,
                    from_scratch,
                    no_notifications,
                    comment,
                );
                commands::deployments::trigger(&client, environment, options).await?;
            }
        },
        Commands::Repositories { command } => match command {
            RepositoryCommands::List { page } => {
                commands::repositories::list(&client, page.into()).await?;
            }
            RepositoryCommands::Show { id } => {
                commands::repositories::show(&client, id).await?;
            }
        },
        Commands::Environments { command } => match command {
            EnvironmentCommands::List { repository, page } => {
                commands::environments::list(&client, repository, page.into()).await?;
            }
            EnvironmentCommands::Show { id } => {
                commands::environments::show(&client, id).await?;
            }
        },
        Commands::Servers { command } => match command {
            ServerCommands::List {
                repository,
                environment,
                page,
            } => {
                commands::servers::list(&client, repository, environment, page.into()).await?;
            }
            ServerCommands::Show { id } => {
                commands::servers::show(&client, id).await?;
            }
        },
    }

    Ok(())
}
