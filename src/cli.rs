//! CLI module
//!
//! This module provides the command-line interface for browsing and editing profiles.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;

use crate::{
    api::{ClientConfig, HttpClientImpl, ProfileApi},
    models::{AddProfileParams, DeleteProfileParams, MutationReply, Profile, ProfileLookup},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL [fallback: $NEXT_PUBLIC_URL_API, then http://localhost:8080]
    #[arg(short, long, env = "URL_API")]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all profiles
    Profiles,

    /// Show a single profile
    Profile {
        /// Profile id
        id: i64,
    },

    /// Add a new profile
    Add {
        /// Display name of the profile
        nombre: String,
    },

    /// Delete a profile
    Delete {
        /// Profile id
        id: i64,
    },

    /// List the image URLs of a profile
    Images {
        /// Profile id
        id: i64,
    },

    /// Print the URL of the most recent image of a profile
    #[command(name = "latest-image")]
    LatestImage {
        /// Profile id
        id: i64,
    },

    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Run the CLI application
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = create_client(cli.api_url.as_deref());

    match &cli.command {
        Commands::Profiles => {
            let profiles = client.get_profiles().await?;
            if profiles.is_empty() {
                println!("No profiles yet. Add one with 'galeria add <NOMBRE>'");
            }
            for profile in &profiles {
                print_profile(profile);
            }
        }

        Commands::Profile { id } => match client.get_profile(*id).await? {
            ProfileLookup::Found(profile) => print_profile(&profile),
            ProfileLookup::NotFound => println!("Profile {} not found", id),
        },

        Commands::Add { nombre } => {
            let params = AddProfileParams {
                nombre: nombre.clone(),
            };
            print_reply(&client.add_profile(params).await?);
        }

        Commands::Delete { id } => {
            let reply = client.delete_profile(DeleteProfileParams { id: *id }).await?;
            print_reply(&reply);
        }

        Commands::Images { id } => {
            let urls = client.get_image_urls_by_profile(*id).await?;
            if urls.is_empty() {
                println!("Profile {} has no images", id);
            }
            for url in urls {
                println!("{}", url);
            }
        }

        Commands::LatestImage { id } => {
            println!("{}", client.get_latest_image_url_by_profile(*id).await?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, bin_name, &mut io::stdout());
        }
    }

    Ok(())
}

fn create_client(api_url: Option<&str>) -> HttpClientImpl {
    let config = match api_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env().unwrap_or_default(),
    };

    HttpClientImpl::with_config(config)
}

fn print_profile(profile: &Profile) {
    println!("{} {}", format!("[{}]", profile.id).dimmed(), profile.nombre.bold());
    for (key, value) in &profile.extra {
        println!("    {}: {}", key, value);
    }
}

fn print_reply(reply: &MutationReply) {
    if reply.is_success() {
        println!("{}", reply.mensaje.green());
    } else {
        println!("{}", reply.mensaje.red());
    }
}
