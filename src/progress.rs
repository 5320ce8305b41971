//! Progress bar abstraction that works with and without CLI features

#[cfg(feature = "cli")]
use indicatif::{ProgressBar, ProgressStyle};

/// Progress over the photos of one orientation
#[derive(Debug)]
pub enum ProgressIndicator {
    #[cfg(feature = "cli")]
    Indicatif(ProgressBar),
    NoOp,
}

impl ProgressIndicator {
    /// Create an indicator for `total` photos; a no-op unless `visible`
    #[must_use]
    pub fn for_photos(total: u64, visible: bool) -> Self {
        if !visible {
            return Self::NoOp;
        }

        #[cfg(feature = "cli")]
        {
            let pb = ProgressBar::new(total);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            {
                pb.set_style(style.progress_chars("#>-"));
            }
            Self::Indicatif(pb)
        }
        #[cfg(not(feature = "cli"))]
        {
            let _ = total;
            Self::NoOp
        }
    }

    /// Set message for progress indicator
    pub fn set_message(&self, msg: String) {
        match self {
            #[cfg(feature = "cli")]
            Self::Indicatif(pb) => pb.set_message(msg),
            Self::NoOp => {}, // Silent operation
        }
    }

    /// Advance by one photo
    pub fn advance(&self) {
        match self {
            #[cfg(feature = "cli")]
            Self::Indicatif(pb) => pb.inc(1),
            Self::NoOp => {},
        }
    }

    /// Finish progress indicator with message
    pub fn finish_with_message(&self, msg: String) {
        match self {
            #[cfg(feature = "cli")]
            Self::Indicatif(pb) => pb.finish_with_message(msg),
            Self::NoOp => {},
        }
    }
}
