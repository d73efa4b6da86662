use std::io::{stdin, Read};

use escframe::{frame_handler_fn, ByteSource, StreamProcessor, ESC, SOF};

fn main() -> Result<(), std::io::Error> {
    env_logger::init();

    let mut processor = StreamProcessor::new(frame_handler_fn(|frame| {
        println!("{frame}");
    }));

    if std::env::args().any(|arg| arg == "--replay") {
        // Two unrelated sessions; the second completes a frame opened at the
        // end of the first.
        processor.process(ByteSource::new(vec![
            0x70, ESC, SOF, ESC, b'H', b'e', b'l', b'l', b'o', ESC, SOF, 0x07, ESC, SOF,
        ]));
        processor.process(ByteSource::new(vec![
            b'W', b'o', b'r', b'l', b'd', ESC, SOF, 0x99,
        ]));
        return Ok(());
    }

    let mut r = stdin();
    let mut buf = [0_u8; 64];
    loop {
        // Each read is handed over as its own session.
        let read_len = r.read(&mut buf[..])?;
        if read_len == 0 {
            return Ok(());
        }
        processor.process(buf[..read_len].iter().copied());
    }
}
