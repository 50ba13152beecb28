//! Line-oriented session
//!
//! Reads one command per line, parses it with clap and runs it against the
//! session's store. User mistakes (validation failures, unknown or ambiguous
//! names, bad syntax) are reported and the session carries on; only a failure
//! to write the session output ends it.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::display::{format_history, format_record_details, format_record_list};
use crate::error::{LedgerError, LedgerResult};
use crate::export::export_records_to_file;
use crate::forms::RecordInput;
use crate::models::Money;
use crate::services::CustomerService;
use crate::storage::Storage;

const PROMPT: &str = "fibertrack> ";

#[derive(Parser, Debug)]
#[command(
    name = "fibertrack",
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]"
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

/// Commands accepted by the shell
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Add a customer record
    Add {
        /// Customer name
        #[arg(long, default_value = "")]
        name: String,
        /// Date of purchase (YYYY-MM-DD, default today)
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        size: String,
        #[arg(long, default_value = "")]
        design: String,
        #[arg(long, default_value = "")]
        colour: String,
        /// Rate (default 0.00)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        rate: String,
        /// Bill amount (default 0.00)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        bill: String,
        /// Balance amount (default 0.00)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        balance: String,
    },

    /// List all customer records
    #[command(alias = "ls")]
    List,

    /// Show one record by name or ID
    Show {
        /// Customer name or record ID
        record: String,
    },

    /// Set the balance amount of a record
    Balance {
        /// Customer name or record ID
        record: String,
        /// New balance amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Update every record with this customer name
        #[arg(long)]
        all: bool,
    },

    /// Show the changes made in this session
    History {
        /// Only show the most recent changes
        count: Option<usize>,
    },

    /// Export all records to a CSV file
    Export {
        /// Output file path
        path: PathBuf,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Whether the session continues after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Split a command line into words, honouring single and double quotes
pub fn tokenize(line: &str) -> LedgerResult<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quote.is_some() {
        return Err(LedgerError::Validation("Unterminated quote".into()));
    }
    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

/// An interactive or scripted session over one store
pub struct Shell<'a> {
    storage: &'a mut Storage,
    settings: &'a Settings,
    today: NaiveDate,
}

impl<'a> Shell<'a> {
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            today: Local::now().date_naive(),
        }
    }

    /// Use a fixed date for the purchase date floor
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Run commands from `input` until it ends or `quit` is read
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
        prompt: bool,
    ) -> LedgerResult<()> {
        if prompt {
            writeln!(output, "{}", self.settings.business_name)?;
            writeln!(output, "Type 'help' for commands, 'quit' to leave.")?;
        }

        let mut line = String::new();
        loop {
            if prompt {
                write!(output, "{}", PROMPT)?;
                output.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            if self.run_line(&line, &mut output)? == Flow::Quit {
                break;
            }
        }

        output.flush()?;
        Ok(())
    }

    /// Run a single command line
    pub fn run_line<W: Write>(&mut self, line: &str, output: &mut W) -> LedgerResult<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let tokens = match tokenize(line) {
            Ok(tokens) => tokens,
            Err(e) => {
                writeln!(output, "Warning: {}", e)?;
                return Ok(Flow::Continue);
            }
        };

        let command = match ShellLine::try_parse_from(tokens) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                // Covers `help` and `--help` as well as real syntax errors
                write!(output, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
        };

        if command == ShellCommand::Quit {
            return Ok(Flow::Quit);
        }

        match self.execute(command) {
            Ok(message) => write!(output, "{}", message)?,
            Err(e) if is_user_error(&e) => writeln!(output, "Warning: {}", e)?,
            Err(e) => {
                log::error!("{}", e);
                writeln!(output, "Error: {}", e)?;
            }
        }

        Ok(Flow::Continue)
    }

    /// Execute a command and return the text to show
    pub fn execute(&mut self, command: ShellCommand) -> LedgerResult<String> {
        let symbol = self.settings.currency_symbol.clone();
        let date_format = self.settings.date_format.clone();
        let today = self.today;
        let mut service = CustomerService::new(self.storage);

        match command {
            ShellCommand::Add {
                name,
                date,
                size,
                design,
                colour,
                rate,
                bill,
                balance,
            } => {
                let input = RecordInput {
                    customer_name: name,
                    purchase_date: date,
                    size,
                    design,
                    colour,
                    rate,
                    bill_amount: bill,
                    balance_amount: balance,
                };
                let record = service.add(input.parse(today)?)?;
                Ok(format!(
                    "Customer {} added successfully! ({})\n",
                    record.customer_name, record.id
                ))
            }

            ShellCommand::List => Ok(format_record_list(&service.list()?, &symbol, &date_format)),

            ShellCommand::Show { record } => {
                let found = service
                    .find(&record)?
                    .ok_or_else(|| LedgerError::record_not_found(record.trim()))?;
                Ok(format_record_details(&found, &symbol, &date_format))
            }

            ShellCommand::Balance { record, amount, all } => {
                let amount = Money::parse_with_symbol(&amount, &symbol)
                    .map_err(|e| LedgerError::Validation(e.to_string()))?;

                if all {
                    let name = record.trim();
                    let updated = service.update_balance_by_name(name, amount)?;
                    if updated == 0 {
                        return Ok(format!("No customer named '{}'; nothing changed.\n", name));
                    }
                    return Ok(format!(
                        "Balance amount for {} updated to {} ({} record(s))\n",
                        name,
                        amount.format_with_symbol(&symbol),
                        updated
                    ));
                }

                let target = service.resolve_unique(&record)?;
                let updated = service.update_balance(target.id, amount)?;
                Ok(format!(
                    "Balance amount for {} updated to {}\n",
                    updated.customer_name,
                    updated.balance_amount.format_with_symbol(&symbol)
                ))
            }

            ShellCommand::History { count } => {
                let audit = self.storage.audit();
                let entries = match count {
                    Some(count) => audit.recent(count),
                    None => audit.entries(),
                };
                Ok(format_history(entries))
            }

            ShellCommand::Export { path } => {
                let records = service.list()?;
                export_records_to_file(&records, &path)?;
                Ok(format!(
                    "Exported {} record(s) to {}\n",
                    records.len(),
                    path.display()
                ))
            }

            ShellCommand::Quit => Ok(String::new()),
        }
    }
}

fn is_user_error(err: &LedgerError) -> bool {
    err.is_validation() || err.is_not_found() || err.is_ambiguous()
}
