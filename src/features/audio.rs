//! Audio functions

vcp_features! {
    pub enum Audio {
        AudioBalanceLR = 0x93,
        AudioBass = 0x91,
        AudioJackConnectionStatus = 0x65,
        AudioMicrophoneVolume = 0x64,
        AudioMute = 0x8D,
        AudioProcessorMode = 0x94,
        AudioSpeakerSelect = 0x63,
        AudioSpeakerVolume = 0x62,
        AudioTreble = 0x8F,
    }
}
