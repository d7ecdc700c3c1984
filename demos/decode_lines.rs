//! Decodes NMEA 0183 lines from standard input, or a short built-in log if none is
//! piped in.
//!
//! Run with `RUST_LOG=debug` to see why lines are rejected.

use std::io::{self, BufRead, IsTerminal};

use nmea0183_sentence::{
    Fragment, SentenceFactory, TalkerId, reassemble,
    sentences::{GGA, HDT, RMC, VDM},
};

const SAMPLE: &str = "\
$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47
$GPRMC,142312.000,V,,,,,,,080514,,*20
$HEHDT,274.1,T*2F
!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E
!AIVDM,2,2,3,B,1@0000000000000,2*55
$GPXYZ,1,2,3*00
not a sentence
";

fn main() -> io::Result<()> {
    env_logger::init();

    let factory = SentenceFactory::default();
    let mut fragments: Vec<VDM> = Vec::new();

    let lines: Vec<String> = if io::stdin().is_terminal() {
        SAMPLE.lines().map(str::to_owned).collect()
    } else {
        io::stdin().lock().lines().collect::<io::Result<_>>()?
    };

    for line in &lines {
        let sentence = match factory.create_from_text(line) {
            Ok(sentence) => sentence,
            Err(err) => {
                println!("skipped: {err}");
                continue;
            }
        };

        if let Some(gga) = sentence.downcast_ref::<GGA>() {
            println!(
                "GGA  position {:?}, {:?} with {:?} satellites",
                gga.latitude(),
                gga.longitude(),
                gga.satellite_count()
            );
        } else if let Some(rmc) = sentence.downcast_ref::<RMC>() {
            println!("RMC  valid: {:?}", rmc.is_valid());
        } else if let Some(hdt) = sentence.downcast_ref::<HDT>() {
            println!("HDT  heading {:?}", hdt.heading());
        } else if let Some(vdm) = sentence.downcast_ref::<VDM>() {
            fragments.push(vdm.clone());
            if vdm.header().is_ok_and(|header| header.is_last()) {
                match reassemble(&fragments) {
                    Ok((payload, fill_bits)) => {
                        println!("VDM  payload {payload} ({fill_bits} fill bits)")
                    }
                    Err(err) => println!("VDM  {err}"),
                }
                fragments.clear();
            }
        } else {
            println!("{}  {}", sentence.record().sentence_id(), sentence);
        }
    }

    let mut reply = factory
        .create_for_talker(TalkerId::HE, "HDT")
        .map_err(io::Error::other)?;
    reply
        .record_mut()
        .set_degrees(0, 90.0)
        .map_err(io::Error::other)?;
    println!("encoded: {reply}");

    Ok(())
}
