//! Test fixtures: byte buffers shaped like real files carrying XMP
#![allow(dead_code)]

/// A packet as written by photo managers, with keywords, ratings, rights and
/// one face region
pub const PHOTO_XMP: &str = r#"<x:xmpmeta xmlns:x="adobe:ns:meta/" x:xmptk="XMP Core 5.5.0">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about=""
        xmlns:dc="http://purl.org/dc/elements/1.1/"
        xmlns:xmp="http://ns.adobe.com/xap/1.0/"
        xmlns:xmpRights="http://ns.adobe.com/xap/1.0/rights/"
        xmlns:MicrosoftPhoto="http://ns.microsoft.com/photo/1.0/"
        xmlns:cc="http://creativecommons.org/ns#"
        xmlns:mwg-rs="http://www.metadataworkinggroup.com/schemas/regions/"
        xmlns:stArea="http://ns.adobe.com/xmp/sType/Area#"
        xmlns:stDim="http://ns.adobe.com/xap/1.0/sType/Dimensions#">
      <xmp:CreatorTool>Adobe Photoshop Lightroom</xmp:CreatorTool>
      <xmp:Rating>5</xmp:Rating>
      <MicrosoftPhoto:Rating>88</MicrosoftPhoto:Rating>
      <dc:subject>
        <rdf:Bag>
          <rdf:li>cat</rdf:li>
          <rdf:li>dog</rdf:li>
        </rdf:Bag>
      </dc:subject>
      <MicrosoftPhoto:LastKeywordXMP>
        <rdf:Bag>
          <rdf:li>pets</rdf:li>
        </rdf:Bag>
      </MicrosoftPhoto:LastKeywordXMP>
      <dc:rights>
        <rdf:Alt>
          <rdf:li xml:lang="x-default">All rights reserved</rdf:li>
        </rdf:Alt>
      </dc:rights>
      <xmpRights:UsageTerms>
        <rdf:Alt>
          <rdf:li xml:lang="x-default">Do not redistribute</rdf:li>
        </rdf:Alt>
      </xmpRights:UsageTerms>
      <cc:attributionName>Jane Doe</cc:attributionName>
      <mwg-rs:Regions rdf:parseType="Resource">
        <mwg-rs:AppliedToDimensions rdf:parseType="Resource">
          <stDim:w>4000</stDim:w>
          <stDim:h>3000</stDim:h>
        </mwg-rs:AppliedToDimensions>
        <mwg-rs:RegionList>
          <rdf:Bag>
            <rdf:li>
              <rdf:Description>
                <mwg-rs:Name>Jane</mwg-rs:Name>
                <mwg-rs:Type>Face</mwg-rs:Type>
                <mwg-rs:Area rdf:parseType="Resource">
                  <stArea:x>0.5</stArea:x>
                  <stArea:y>0.25</stArea:y>
                  <stArea:w>0.1</stArea:w>
                  <stArea:h>0.2</stArea:h>
                </mwg-rs:Area>
              </rdf:Description>
            </rdf:li>
          </rdf:Bag>
        </mwg-rs:RegionList>
      </mwg-rs:Regions>
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>"#;

/// Wrap `xmp` in an `<?xpacket?>` and a JPEG APP1 segment, followed by some
/// entropy-coded-looking bytes
pub fn jpeg_with_xmp(xmp: &str) -> Vec<u8> {
    let packet = format!(
        "<?xpacket begin=\"\u{feff}\" id=\"W5M0MpCehiHzreSzNTczkc9d\"?>\n{}\n<?xpacket end=\"w\"?>",
        xmp
    );
    let namespace = b"http://ns.adobe.com/xap/1.0/\0";
    let segment_len = (2 + namespace.len() + packet.len()) as u16;

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&segment_len.to_be_bytes());
    jpeg.extend_from_slice(namespace);
    jpeg.extend_from_slice(packet.as_bytes());
    jpeg.extend_from_slice(&[0xFF, 0xDB, 0x00, 0x43, 0x00, 0x10, 0x0B, 0x0C]);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

/// The minimal envelope around a bare `rdf:Description` body
pub fn description(body: &str) -> String {
    format!(
        "<x:xmpmeta xmlns:x=\"adobe:ns:meta/\"><rdf:RDF><rdf:Description>{}</rdf:Description></rdf:RDF></x:xmpmeta>",
        body
    )
}

/// `junk bytes <xmp> trailing junk`
pub fn junk_wrapped(xmp: &str) -> Vec<u8> {
    format!("junk bytes {} trailing junk", xmp).into_bytes()
}
