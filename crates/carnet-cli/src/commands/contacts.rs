use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::{parse_entry, read_entries, read_records};
use anyhow::Result;
use carnet_core::domain::{ContactField, ContactRecord, Gender};
use carnet_core::{ContactChange, FieldValue};
use clap::Args;
use serde::Serialize;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Args)]
pub struct NewArgs {
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub first_name: String,
    /// Male, Female or NoGender; falls back to defaults.gender from config
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub birth_date: Option<String>,
    #[arg(long)]
    pub nickname: Option<String>,
    #[arg(long)]
    pub work_phone: Option<String>,
    #[arg(long)]
    pub linkedin: Option<String>,
    #[arg(long)]
    pub github: Option<String>,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    pub file: PathBuf,
    /// Field name, e.g. emailAddress or linkedinLink
    pub field: String,
    /// New value; omit to clear the field
    pub value: Option<String>,
    /// Position of the contact when the file holds an array
    #[arg(long, default_value_t = 0)]
    pub index: usize,
}

#[derive(Debug, Serialize)]
struct CheckReportItem {
    file: String,
    index: usize,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct SetOutput<'a> {
    changes: &'a [ContactChange],
    contact: &'a ContactRecord,
}

pub fn new_contact(ctx: &Context<'_>, args: NewArgs) -> Result<()> {
    let gender = match args.gender.as_deref() {
        Some(raw) => raw.parse::<Gender>()?,
        None => ctx.config.defaults.gender.ok_or_else(|| {
            invalid_input("gender is required: pass --gender or set defaults.gender in config")
        })?,
    };

    let mut record = ContactRecord::new(
        args.last_name,
        args.first_name,
        gender,
        args.address,
        args.phone,
        args.email,
    )?;
    record.set_birth_date(args.birth_date);
    record.set_nickname(args.nickname);
    record.set_professional_phone_number(args.work_phone);
    record.set_linkedin_link(args.linkedin)?;
    record.set_github_gitlab_link(args.github)?;

    print_record(ctx, &record)
}

pub fn check_contacts(ctx: &Context<'_>, args: CheckArgs) -> Result<()> {
    let mut report = Vec::new();
    for path in &args.files {
        for (index, entry) in read_entries(path)?.into_iter().enumerate() {
            let item = match parse_entry(entry) {
                Ok(_) => CheckReportItem {
                    file: path.display().to_string(),
                    index,
                    valid: true,
                    field: None,
                    error: None,
                },
                Err(err) => {
                    debug!(file = %path.display(), index, error = %err.message(), "invalid contact");
                    CheckReportItem {
                        file: path.display().to_string(),
                        index,
                        valid: false,
                        field: err.field(),
                        error: Some(err.message()),
                    }
                }
            };
            report.push(item);
        }
    }

    if ctx.json {
        print_json(&report)?;
    } else {
        for item in &report {
            match &item.error {
                None => println!("{}[{}]: ok", item.file, item.index),
                Some(error) => println!("{}[{}]: {}", item.file, item.index, error),
            }
        }
    }

    let invalid = report.iter().filter(|item| !item.valid).count();
    if invalid > 0 {
        return Err(invalid_input(format!(
            "{} of {} contacts failed validation",
            invalid,
            report.len()
        )));
    }
    Ok(())
}

pub fn show_contacts(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let records = read_records(&args.file)?;
    if ctx.json {
        return print_json(&records);
    }
    for record in &records {
        println!("{}", record);
    }
    Ok(())
}

pub fn set_field(ctx: &Context<'_>, args: SetArgs) -> Result<()> {
    let field: ContactField = args.field.parse()?;
    let mut records = read_records(&args.file)?;
    let count = records.len();
    if args.index >= count {
        return Err(invalid_input(format!(
            "index {} out of range: {} holds {} contacts",
            args.index,
            args.file.display(),
            count
        )));
    }
    let mut record = records.swap_remove(args.index);

    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    record.subscribe_all(move |change| sink.borrow_mut().push(change.clone()));
    record.set(field, args.value.as_deref())?;

    let changes = changes.borrow();
    if ctx.json {
        return print_json(&SetOutput {
            changes: &changes,
            contact: &record,
        });
    }
    if changes.is_empty() {
        println!("unchanged {}", field);
    }
    for change in changes.iter() {
        println!(
            "changed {}: {} -> {}",
            change.field,
            describe(change.old.as_ref()),
            describe(change.new.as_ref())
        );
    }
    println!("{}", record);
    Ok(())
}

fn print_record(ctx: &Context<'_>, record: &ContactRecord) -> Result<()> {
    if ctx.json {
        return print_json(record);
    }
    println!("{}", record);
    Ok(())
}

fn describe(value: Option<&FieldValue>) -> String {
    match value {
        Some(value) => format!("'{}'", value),
        None => "null".to_string(),
    }
}
