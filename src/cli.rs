use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::catalog::PointerWidth;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PointerWidthArg {
    #[value(name = "32")]
    Bits32,
    #[value(name = "64")]
    Bits64,
    #[value(name = "128")]
    Bits128,
}

impl From<PointerWidthArg> for PointerWidth {
    fn from(arg: PointerWidthArg) -> Self {
        match arg {
            PointerWidthArg::Bits32 => PointerWidth::Bits32,
            PointerWidthArg::Bits64 => PointerWidth::Bits64,
            PointerWidthArg::Bits128 => PointerWidth::Bits128,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "protomap")]
#[command(about = "Native API prototype extraction and FFI type mapping", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (overridden by PROTOMAP_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the default rule file to the current directory
    Init {
        /// Force overwrite existing rule file
        #[arg(short, long)]
        force: bool,
    },

    /// Classify native type tokens through the type catalog
    Classify {
        /// Native type spellings, e.g. LPCWSTR DWORD_PTR
        #[arg(required = true)]
        tokens: Vec<String>,

        /// Pointer width of the target platform (defaults to the host's)
        #[arg(long = "pointer-width", value_enum)]
        pointer_width: Option<PointerWidthArg>,
    },

    /// Parse a function prototype and print the classified entry as JSON
    Parse {
        /// File holding the prototype text (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Pointer width of the target platform (defaults to the host's)
        #[arg(long = "pointer-width", value_enum)]
        pointer_width: Option<PointerWidthArg>,

        /// Owning module recorded on the entry
        #[arg(long, default_value = "")]
        module: String,
    },

    /// Decompose a documentation search title into name and source
    Title {
        /// Title text, e.g. "CreateFileW function (fileapi.h)"
        text: String,
    },
}
