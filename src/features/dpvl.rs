//! Digital Packet Video Link diagnostics

vcp_features! {
    pub enum DigitalPacketVideoLink {
        BodyCrcErrorCount = 0xBC,
        ClientId = 0xBD,
        HeaderErrorCount = 0xBB,
        LinkControl = 0xBE,
        MonitorStatus = 0xB7,
        MonitorXOrigin = 0xB9,
        MonitorYOrigin = 0xBA,
        PacketCount = 0xB8,
    }
}
