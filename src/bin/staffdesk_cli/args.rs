//! Command-line surface for `staffdesk-cli`.

#![deny(clippy::all, clippy::pedantic)]

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use staffdesk::config::ConfigOverrides;
use staffdesk::domain::filter::StatusFilter;
use staffdesk::domain::inquiries::InquiryStatus;

#[derive(Parser, Debug)]
#[command(name = "staffdesk-cli", version, about = "Employee inquiry review client", long_about = None)]
pub struct Cli {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "STAFFDESK_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: ConfigOverrides,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inquiry review (list/approve/decline)
    Inquiries(InquiriesArgs),
    /// Inquiry counts per status
    Dashboard {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show the signed-in employee, or another employee by id
    Profile {
        #[arg(long)]
        id: Option<String>,
    },
    /// Employee directory
    Employees(EmployeesArgs),
}

#[derive(Parser, Debug)]
pub struct InquiriesArgs {
    #[command(subcommand)]
    pub action: InquiriesCmd,
}

#[derive(Subcommand, Debug)]
pub enum InquiriesCmd {
    /// List inquiries, pending first
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = StatusArg::All)]
        status: StatusArg,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Approve a pending inquiry
    Approve { id: String },
    /// Decline a pending inquiry with a justification
    Decline {
        id: String,
        #[arg(long, conflicts_with = "notes_file")]
        notes: Option<String>,
        #[arg(long)]
        notes_file: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
pub struct EmployeesArgs {
    #[command(subcommand)]
    pub action: EmployeesCmd,
}

#[derive(Subcommand, Debug)]
pub enum EmployeesCmd {
    /// List employees, optionally filtered by name
    List {
        #[arg(long)]
        search: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusArg {
    All,
    Pending,
    Approved,
    Declined,
}

impl fmt::Display for StatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusArg::All => "all",
            StatusArg::Pending => "pending",
            StatusArg::Approved => "approved",
            StatusArg::Declined => "declined",
        };
        write!(f, "{s}")
    }
}

impl From<StatusArg> for StatusFilter {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::All => StatusFilter::All,
            StatusArg::Pending => StatusFilter::Only(InquiryStatus::Pending),
            StatusArg::Approved => StatusFilter::Only(InquiryStatus::Approved),
            StatusArg::Declined => StatusFilter::Only(InquiryStatus::Declined),
        }
    }
}
