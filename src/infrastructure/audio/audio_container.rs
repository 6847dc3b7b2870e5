/// Container formats accepted by the hosted Whisper endpoints, detected
/// from the payload's magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioContainer {
    Wav,
    Mp3,
    Ogg,
    Flac,
    Mp4,
    Webm,
}

impl AudioContainer {
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WAVE" {
            return Some(Self::Wav);
        }
        if data.starts_with(b"ID3") || (data.len() >= 2 && data[0] == 0xFF && data[1] & 0xE0 == 0xE0)
        {
            return Some(Self::Mp3);
        }
        if data.starts_with(b"OggS") {
            return Some(Self::Ogg);
        }
        if data.starts_with(b"fLaC") {
            return Some(Self::Flac);
        }
        if data.len() >= 8 && &data[4..8] == b"ftyp" {
            return Some(Self::Mp4);
        }
        if data.starts_with(&[0x1A, 0x45, 0xDF, 0xA3]) {
            return Some(Self::Webm);
        }
        None
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Wav => "audio.wav",
            Self::Mp3 => "audio.mp3",
            Self::Ogg => "audio.ogg",
            Self::Flac => "audio.flac",
            Self::Mp4 => "audio.m4a",
            Self::Webm => "audio.webm",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
            Self::Ogg => "audio/ogg",
            Self::Flac => "audio/flac",
            Self::Mp4 => "audio/mp4",
            Self::Webm => "audio/webm",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_riff_wave_header_when_sniffing_then_detects_wav() {
        let mut data = b"RIFF".to_vec();
        data.extend_from_slice(&[0, 0, 0, 0]);
        data.extend_from_slice(b"WAVEfmt ");
        assert_eq!(AudioContainer::sniff(&data), Some(AudioContainer::Wav));
    }

    #[test]
    fn given_id3_tag_when_sniffing_then_detects_mp3() {
        assert_eq!(AudioContainer::sniff(b"ID3\x04\x00"), Some(AudioContainer::Mp3));
    }

    #[test]
    fn given_text_payload_when_sniffing_then_returns_none() {
        assert_eq!(AudioContainer::sniff(b"hello world"), None);
    }
}
