use std::{error::Error, path::Path};

use log::debug;

use crate::{
    model::template::TemplateDescriptor,
    prepare::{PrepareOptions, Preparer},
};

/// Handler to prepare command
pub fn do_prepare(
    preparer: &Preparer,
    template_file: &Path,
    working_directory: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let template = TemplateDescriptor::from_file(template_file)?;
    debug!("Loaded template descriptor {:?}", template);

    let opts = PrepareOptions {
        working_directory: working_directory.map(|p| p.to_path_buf()),
    };
    let checkout_path = preparer.prepare(&template, &opts)?;

    println!("{}", checkout_path.display());

    Ok(())
}
