use quick_error::quick_error;

quick_error! {
    #[derive(Debug, PartialEq, Eq)]
    pub enum Color {
        Unknown(value: String) {
            display("color is not in the palette: {value}")
        }
    }
}

quick_error! {
    #[derive(Debug, PartialEq, Eq)]
    pub enum Store {
        OutOfRange(row: usize, col: usize) {
            display("cell out of range: ({row}, {col})")
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum Export {
        Io(err: std::io::Error) {
            from()
            display("failed to write export file: {}", err)
        }
        Serialization(err: serde_json::Error) {
            from()
            display("failed to serialize matrix: {}", err)
        }
        Cancelled {
            display("export cancelled")
        }
    }
}
