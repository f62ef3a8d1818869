use std::fmt;

/// Callback receiving narration text.
pub type Sink = Box<dyn FnMut(&str)>;

/// Optional text sinks that narrate each instruction as it executes.
///
/// `step` writes a fragment (address and raw bytes) before dispatching, and
/// handlers write one line describing what they did. Nothing is formatted
/// unless a sink is installed or `trace` level logging is enabled for this
/// module.
#[derive(Default)]
pub struct Trace {
    line: Option<Sink>,
    fragment: Option<Sink>,
}

impl Trace {
    pub fn set_line_sink(&mut self, sink: impl FnMut(&str) + 'static) {
        self.line = Some(Box::new(sink));
    }

    pub fn set_fragment_sink(&mut self, sink: impl FnMut(&str) + 'static) {
        self.fragment = Some(Box::new(sink));
    }

    /// Remove both sinks.
    pub fn clear(&mut self) {
        self.line = None;
        self.fragment = None;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.line.is_some() || self.fragment.is_some() || log::log_enabled!(log::Level::Trace)
    }

    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Some(sink) = self.line.as_mut() {
            sink(&args.to_string());
        }
        log::trace!("{args}");
    }

    pub fn fragment(&mut self, args: fmt::Arguments<'_>) {
        if let Some(sink) = self.fragment.as_mut() {
            sink(&args.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn sinks_receive_formatted_text() {
        let lines = Rc::new(RefCell::new(Vec::new()));
        let fragments = Rc::new(RefCell::new(String::new()));

        let mut trace = Trace::default();
        {
            let lines = Rc::clone(&lines);
            trace.set_line_sink(move |s| lines.borrow_mut().push(s.to_owned()));
        }
        {
            let fragments = Rc::clone(&fragments);
            trace.set_fragment_sink(move |s| fragments.borrow_mut().push_str(s));
        }

        trace.fragment(format_args!("{:04X}\t", 0x0100));
        trace.line(format_args!("XOR {}", "A"));

        assert_eq!(*fragments.borrow(), "0100\t");
        assert_eq!(*lines.borrow(), vec!["XOR A".to_owned()]);
        assert!(trace.is_enabled());

        trace.clear();
        trace.line(format_args!("ignored"));
        assert_eq!(lines.borrow().len(), 1);
    }
}
